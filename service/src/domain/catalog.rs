//! Catalog reference data definitions.
//!
//! The catalog itself (brands, models, engines and so on) is maintained
//! outside of this service. Only the IDs are referenced here, and their
//! existence is guaranteed by the referential integrity of the datastore.

pub mod brand {
    //! `Brand` reference definitions.

    common::define_id! {
        #[doc = "ID of a vehicle `Brand`."]
        Id
    }
}

pub mod model {
    //! `Model` reference definitions.

    common::define_id! {
        #[doc = "ID of a vehicle `Model`."]
        Id
    }
}

pub mod generation {
    //! `Generation` reference definitions.

    common::define_id! {
        #[doc = "ID of a vehicle model `Generation`."]
        Id
    }
}

pub mod engine {
    //! `Engine` reference definitions.

    common::define_id! {
        #[doc = "ID of an `Engine`."]
        Id
    }
}

pub mod color {
    //! `Color` reference definitions.

    common::define_id! {
        #[doc = "ID of a `Color`."]
        Id
    }
}

pub mod equipment_item {
    //! `EquipmentItem` reference definitions.

    common::define_id! {
        #[doc = "ID of an `EquipmentItem`."]
        Id
    }
}

pub mod leasing_company {
    //! `LeasingCompany` reference definitions.

    common::define_id! {
        #[doc = "ID of a `LeasingCompany`."]
        Id
    }
}

pub mod file {
    //! `File` reference definitions.

    common::define_id! {
        #[doc = "ID of a stored `File`."]
        Id
    }
}

pub mod gallery {
    //! `Gallery` reference definitions.

    common::define_id! {
        #[doc = "ID of an image `Gallery`."]
        Id
    }
}

pub mod customer {
    //! `Customer` reference definitions.

    common::define_id! {
        #[doc = "ID of a `Customer`."]
        Id
    }
}
