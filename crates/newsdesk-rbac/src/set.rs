//! # Permission Sets
//!
//! The grant collection attached to a role: either an ordered list of
//! permission keys, or the universal wildcard. The empty set grants
//! nothing, so missing or unknown role data always fails closed.

use serde::{Deserialize, Serialize};

use crate::keys::WILDCARD;

/// A role's permission grants.
///
/// A set is either **restricted** (an insertion-ordered list of unique
/// permission keys) or **unrestricted** (the wildcard sentinel). Once the
/// wildcard is present, explicit keys are immaterial: every check against
/// the set succeeds.
///
/// Sets serialize as a plain JSON array of key strings, matching how role
/// configuration is persisted (`["*"]` for the unrestricted set). A
/// deserialized list containing `"*"` anywhere normalizes to the
/// unrestricted set.
///
/// # Example
///
/// ```
/// use newsdesk_rbac::{keys, PermissionSet};
///
/// let mut set = PermissionSet::new();
/// set.grant(keys::ARTICLES_CREATE);
/// set.grant(keys::ARTICLES_EDIT);
///
/// assert!(set.grants(keys::ARTICLES_CREATE));
/// assert!(!set.grants(keys::ARTICLES_MANAGE));
/// assert_eq!(set.len(), 2);
///
/// let admin = PermissionSet::all();
/// assert!(admin.grants("anything.at_all"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PermissionSet {
    /// Granted keys in insertion order. Empty when unrestricted.
    grants: Vec<String>,
    /// Whether the wildcard sentinel is present.
    unrestricted: bool,
}

impl PermissionSet {
    /// Create a new empty set. Grants nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the unrestricted (wildcard) set. Grants everything.
    pub fn all() -> Self {
        Self {
            grants: Vec::new(),
            unrestricted: true,
        }
    }

    /// Build a set from a list of keys.
    ///
    /// Duplicates are dropped, insertion order is kept, and a wildcard
    /// entry anywhere in the input yields the unrestricted set.
    ///
    /// # Example
    ///
    /// ```
    /// use newsdesk_rbac::{keys, PermissionSet};
    ///
    /// let set = PermissionSet::from_keys([keys::ARTICLES_CREATE, keys::ARTICLES_EDIT]);
    /// assert_eq!(set.len(), 2);
    ///
    /// let admin = PermissionSet::from_keys(["articles.edit", "*"]);
    /// assert!(admin.is_unrestricted());
    /// ```
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut set = Self::new();
        for key in keys {
            set.grant(key);
        }
        set
    }

    /// Add a permission key to the set.
    ///
    /// Granting the wildcard switches the set to unrestricted and discards
    /// the explicit keys; granting anything to an unrestricted set is a
    /// no-op. Duplicate keys are ignored.
    ///
    /// # Arguments
    ///
    /// * `key` - The permission key to grant
    pub fn grant(&mut self, key: impl Into<String>) {
        if self.unrestricted {
            return;
        }

        let key = key.into();
        if key == WILDCARD {
            self.unrestricted = true;
            self.grants.clear();
            return;
        }

        if !self.grants.contains(&key) {
            self.grants.push(key);
        }
    }

    /// Remove a permission key from the set.
    ///
    /// Revoking from an unrestricted set has no effect: the wildcard is
    /// withdrawn by replacing the whole set, not by subtraction.
    ///
    /// # Returns
    ///
    /// `true` if the key was present, `false` otherwise
    pub fn revoke(&mut self, key: &str) -> bool {
        let before = self.grants.len();
        self.grants.retain(|granted| granted != key);
        self.grants.len() != before
    }

    /// Check whether the set grants a permission key.
    ///
    /// This is the wildcard-or-exact-match rule: the unrestricted set
    /// grants every key; otherwise the key must match exactly
    /// (case-sensitive).
    ///
    /// # Arguments
    ///
    /// * `key` - The permission key to check
    ///
    /// # Returns
    ///
    /// `true` if the permission is granted, `false` otherwise
    pub fn grants(&self, key: &str) -> bool {
        self.unrestricted || self.grants.iter().any(|granted| granted == key)
    }

    /// Check whether the set grants at least one of the given keys.
    ///
    /// # Example
    ///
    /// ```
    /// use newsdesk_rbac::{keys, PermissionSet};
    ///
    /// let set = PermissionSet::from_keys([keys::ARTICLES_CREATE]);
    /// assert!(set.grants_any(&[keys::ARTICLES_MANAGE, keys::ARTICLES_CREATE]));
    /// assert!(!set.grants_any(&[keys::ARTICLES_APPROVE]));
    /// ```
    pub fn grants_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.grants(key))
    }

    /// Whether this is the wildcard set.
    pub fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    /// Whether the set grants nothing at all.
    pub fn is_empty(&self) -> bool {
        !self.unrestricted && self.grants.is_empty()
    }

    /// Number of explicit keys. Zero for the unrestricted set.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Iterate over the explicit keys in insertion order.
    ///
    /// The unrestricted set yields nothing; callers should check
    /// [`is_unrestricted`](Self::is_unrestricted) first when rendering.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.grants.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<PermissionSet> for Vec<String> {
    fn from(set: PermissionSet) -> Self {
        if set.unrestricted {
            vec![WILDCARD.to_string()]
        } else {
            set.grants
        }
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::from_keys(iter)
    }
}

impl<'a> FromIterator<&'a str> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self::from_keys(iter)
    }
}
