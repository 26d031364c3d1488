//! Ownership guard: the authorisation rules for blog entry operations.
//!
//! Reads are public. Mutations need a verified identity; deleting or
//! editing additionally needs that identity to own the entry. Commenting is
//! open to any authenticated caller.

use crate::domain::{AuthClaim, BlogEntry, Error};

/// Operation being attempted on a blog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Read every entry.
    List,
    /// Read one entry.
    Get,
    /// Change an entry's fields.
    Update,
    /// Remove an entry.
    Delete,
    /// Append a comment.
    Comment,
}

impl Operation {
    /// Whether the operation leaves the entry untouched.
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::List | Self::Get)
    }

    fn requires_ownership(self) -> bool {
        matches!(self, Self::Update | Self::Delete)
    }
}

/// Whether blog field updates go through the ownership guard.
///
/// Deployments have historically allowed anyone to edit any entry's fields,
/// so `Open` is the default. `OwnerOnly` applies the same rule as delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Any caller, anonymous included, may update.
    #[default]
    Open,
    /// Only the owner may update.
    OwnerOnly,
}

impl std::str::FromStr for UpdatePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "owner-only" | "owner_only" => Ok(Self::OwnerOnly),
            other => Err(format!("unknown update policy `{other}`")),
        }
    }
}

/// Decide whether `claim` may perform `operation` on `entry`.
///
/// Fails with [`crate::domain::ErrorCode::Unauthorized`] when a mutation
/// has no identity and [`crate::domain::ErrorCode::Forbidden`] when the
/// identity does not own the entry.
///
/// # Examples
/// ```
/// use bloglist::domain::{
///     AuthClaim, BlogEntry, BlogFields, BlogId, ErrorCode, NewBlog, Operation, UserId,
///     authorize,
/// };
///
/// let owner = UserId::random();
/// let fields = BlogFields {
///     title: Some("t".into()),
///     author: Some("a".into()),
///     url: Some("u".into()),
///     likes: None,
/// };
/// let entry = BlogEntry::from_new(BlogId::random(), NewBlog::try_new(fields, owner).unwrap());
/// let stranger = AuthClaim::new(UserId::random(), "stranger");
///
/// assert!(authorize(None, &entry, Operation::List).is_ok());
/// let err = authorize(Some(&stranger), &entry, Operation::Delete).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::Forbidden);
/// ```
pub fn authorize(
    claim: Option<&AuthClaim>,
    entry: &BlogEntry,
    operation: Operation,
) -> Result<(), Error> {
    if operation.is_read_only() {
        return Ok(());
    }
    let Some(claim) = claim else {
        return Err(Error::unauthorized("authentication required"));
    };
    if operation.requires_ownership() && claim.user_id() != entry.owner() {
        return Err(Error::forbidden("only the owner may modify this blog"));
    }
    Ok(())
}
