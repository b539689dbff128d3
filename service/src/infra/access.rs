//! Static role-based [`Access`] resolver.

use tracerr::Traced;

use crate::{
    access::{self, Granted, Permission},
    domain::user,
    Access,
};

/// [`Access`] resolver granting [`Permission`]s from a static mapping of
/// [`user::Role`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoleGrants;

impl RoleGrants {
    /// Indicates whether the provided [`user::Role`] grants the provided
    /// [`Permission`].
    fn grants(role: user::Role, permission: Permission) -> bool {
        match role {
            user::Role::Admin | user::Role::Manager => true,
            user::Role::Editor => match permission {
                Permission::UpdateOffer
                | Permission::ManageLeasingVariants
                | Permission::ManageColorVariants
                | Permission::ManageOptionalEquipment
                | Permission::ManageCalculations => true,
                Permission::CreateOffer | Permission::DeleteOffer => false,
            },
            user::Role::Viewer => false,
        }
    }
}

impl Access<Granted> for RoleGrants {
    type Ok = bool;
    type Err = Traced<access::Error>;

    async fn execute(&self, op: Granted) -> Result<Self::Ok, Self::Err> {
        let Granted { actor, permission } = op;

        Ok(actor
            .roles
            .iter()
            .any(|role| Self::grants(*role, permission)))
    }
}

#[cfg(test)]
mod spec {
    use super::*;

    #[tokio::test]
    async fn admin_is_granted_everything() {
        let actor = access::Actor {
            id: user::Id::new(),
            roles: vec![user::Role::Admin],
        };

        for permission in [
            Permission::CreateOffer,
            Permission::UpdateOffer,
            Permission::DeleteOffer,
            Permission::ManageLeasingVariants,
            Permission::ManageColorVariants,
            Permission::ManageOptionalEquipment,
            Permission::ManageCalculations,
        ] {
            let granted = RoleGrants
                .execute(Granted {
                    actor: actor.clone(),
                    permission,
                })
                .await
                .unwrap();
            assert!(granted, "`{permission}` not granted");
        }
    }

    #[tokio::test]
    async fn editor_cannot_create_or_delete_offers() {
        let actor = access::Actor {
            id: user::Id::new(),
            roles: vec![user::Role::Editor],
        };

        for permission in [Permission::CreateOffer, Permission::DeleteOffer] {
            let granted = RoleGrants
                .execute(Granted {
                    actor: actor.clone(),
                    permission,
                })
                .await
                .unwrap();
            assert!(!granted, "`{permission}` unexpectedly granted");
        }
    }

    #[tokio::test]
    async fn viewer_is_granted_nothing() {
        let granted = RoleGrants
            .execute(Granted {
                actor: access::Actor {
                    id: user::Id::new(),
                    roles: vec![user::Role::Viewer],
                },
                permission: Permission::UpdateOffer,
            })
            .await
            .unwrap();

        assert!(!granted);
    }
}
