//! Role tags and the visibility policy.
//!
//! Entities carry a set of [`RoleTag`]s in `allowedRoles`; a [`Viewer`] may
//! see an entity when one of those tags grants its role. Admins see
//! everything. The stores never consult this module: listing and detail
//! surfaces apply it to the copies they receive, so admin views can still
//! list every entity unfiltered.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Role name constants
// ---------------------------------------------------------------------------

pub const ROLE_FREE: &str = "free";
pub const ROLE_MEMBER: &str = "member";
pub const ROLE_MASTER: &str = "master";
pub const ROLE_BOTH: &str = "both";
pub const ROLE_ADMIN: &str = "admin";

// ---------------------------------------------------------------------------
// RoleTag
// ---------------------------------------------------------------------------

/// A tag stored in an entity's `allowedRoles` set.
///
/// `Both` is shorthand for "member and master".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    Free,
    Member,
    Master,
    Both,
}

impl RoleTag {
    pub const ALL: [RoleTag; 4] = [RoleTag::Free, RoleTag::Member, RoleTag::Master, RoleTag::Both];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleTag::Free => ROLE_FREE,
            RoleTag::Member => ROLE_MEMBER,
            RoleTag::Master => ROLE_MASTER,
            RoleTag::Both => ROLE_BOTH,
        }
    }

    /// Whether this tag grants access to `viewer`.
    ///
    /// Admin is handled by [`can_view`], not here: no tag names it.
    pub fn grants(self, viewer: Viewer) -> bool {
        matches!(
            (self, viewer),
            (RoleTag::Free, Viewer::Free)
                | (RoleTag::Member, Viewer::Member)
                | (RoleTag::Master, Viewer::Master)
                | (RoleTag::Both, Viewer::Member | Viewer::Master)
        )
    }
}

impl fmt::Display for RoleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_FREE => Ok(RoleTag::Free),
            ROLE_MEMBER => Ok(RoleTag::Member),
            ROLE_MASTER => Ok(RoleTag::Master),
            ROLE_BOTH => Ok(RoleTag::Both),
            other => Err(CoreError::Validation(format!(
                "Invalid role tag '{other}'. Must be one of: free, member, master, both"
            ))),
        }
    }
}

/// The selection new articles and courses start with: every tag.
pub fn default_allowed_roles() -> BTreeSet<RoleTag> {
    RoleTag::ALL.into_iter().collect()
}

// ---------------------------------------------------------------------------
// Viewer
// ---------------------------------------------------------------------------

/// The role of whoever is looking at the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewer {
    Free,
    Member,
    Master,
    /// Administrative override.
    Admin,
}

impl Viewer {
    pub fn as_str(self) -> &'static str {
        match self {
            Viewer::Free => ROLE_FREE,
            Viewer::Member => ROLE_MEMBER,
            Viewer::Master => ROLE_MASTER,
            Viewer::Admin => ROLE_ADMIN,
        }
    }

    pub fn is_admin(self) -> bool {
        self == Viewer::Admin
    }
}

impl fmt::Display for Viewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Viewer {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_FREE => Ok(Viewer::Free),
            ROLE_MEMBER => Ok(Viewer::Member),
            ROLE_MASTER => Ok(Viewer::Master),
            ROLE_ADMIN => Ok(Viewer::Admin),
            other => Err(CoreError::Validation(format!(
                "Invalid viewer role '{other}'. Must be one of: free, member, master, admin"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Decide whether `viewer` may see an entity gated by `allowed_roles`.
///
/// - Admin → always.
/// - Otherwise → some tag in `allowed_roles` grants the viewer's role,
///   with `both` granting member and master.
pub fn can_view(viewer: Viewer, allowed_roles: &BTreeSet<RoleTag>) -> bool {
    viewer.is_admin() || allowed_roles.iter().any(|tag| tag.grants(viewer))
}

/// Anything gated by an `allowedRoles` set.
pub trait RoleGated {
    fn allowed_roles(&self) -> &BTreeSet<RoleTag>;

    fn visible_to(&self, viewer: Viewer) -> bool {
        can_view(viewer, self.allowed_roles())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
