//! Back-office user definitions.
//!
//! User accounts and their role assignments are maintained by an external
//! identity service. This service only consumes user IDs and role sets.

use common::define_kind;

common::define_id! {
    #[doc = "ID of a back-office user."]
    Id
}

define_kind! {
    #[doc = "Role assigned to a back-office user."]
    enum Role {
        #[doc = "Administrator, implicitly granted every permission."]
        Admin = 1,

        #[doc = "Manager of the offer catalog."]
        Manager = 2,

        #[doc = "Editor of offer contents."]
        Editor = 3,

        #[doc = "Read-only viewer."]
        Viewer = 4,
    }
}
