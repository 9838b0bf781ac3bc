//! The HTTP route contract: one [`Operation`] per logical API operation.
//!
//! This table is the single source of truth for the wire surface. The server
//! builds its routers from these templates, and request helpers build
//! concrete URLs with [`Operation::url`], so method and path can never drift
//! between the two sides.

use crate::types::DbId;

/// A logical API operation bound to an HTTP method and a path template.
///
/// Path templates use `:id` placeholders, substituted by plain string
/// replacement -- no escaping beyond stringifying the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub method: &'static str,
    pub path: &'static str,
}

impl Operation {
    /// Build a concrete URL by substituting `:id` in the template.
    pub fn url(&self, id: DbId) -> String {
        self.path.replace(":id", &id.to_string())
    }
}

pub mod auth {
    use super::Operation;

    pub const LOGIN: Operation = Operation {
        method: "POST",
        path: "/api/auth/login",
    };
    pub const LOGOUT: Operation = Operation {
        method: "POST",
        path: "/api/auth/logout",
    };
}

pub mod clients {
    use super::Operation;

    pub const LIST: Operation = Operation {
        method: "GET",
        path: "/api/clients",
    };
    pub const GET: Operation = Operation {
        method: "GET",
        path: "/api/clients/:id",
    };
    pub const CREATE: Operation = Operation {
        method: "POST",
        path: "/api/clients",
    };
    pub const UPDATE: Operation = Operation {
        method: "PUT",
        path: "/api/clients/:id",
    };
    pub const DELETE: Operation = Operation {
        method: "DELETE",
        path: "/api/clients/:id",
    };
}

pub mod developers {
    use super::Operation;

    pub const LIST: Operation = Operation {
        method: "GET",
        path: "/api/developers",
    };
    pub const GET: Operation = Operation {
        method: "GET",
        path: "/api/developers/:id",
    };
    pub const CREATE: Operation = Operation {
        method: "POST",
        path: "/api/developers",
    };
    pub const DELETE: Operation = Operation {
        method: "DELETE",
        path: "/api/developers/:id",
    };
}

/// Every operation in the contract, for exhaustive checks.
pub const ALL: [Operation; 11] = [
    auth::LOGIN,
    auth::LOGOUT,
    clients::LIST,
    clients::GET,
    clients::CREATE,
    clients::UPDATE,
    clients::DELETE,
    developers::LIST,
    developers::GET,
    developers::CREATE,
    developers::DELETE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_substitutes_id() {
        assert_eq!(clients::GET.url(7), "/api/clients/7");
        assert_eq!(developers::DELETE.url(123), "/api/developers/123");
    }

    #[test]
    fn test_url_without_placeholder_is_identity() {
        assert_eq!(clients::LIST.url(7), "/api/clients");
        assert_eq!(auth::LOGIN.url(1), "/api/auth/login");
    }

    #[test]
    fn test_no_duplicate_method_path_pairs() {
        for (i, a) in ALL.iter().enumerate() {
            for b in ALL.iter().skip(i + 1) {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate operation {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }

    #[test]
    fn test_templates_have_at_most_one_placeholder() {
        for op in ALL {
            assert!(op.path.matches(":id").count() <= 1, "path {}", op.path);
        }
    }

    #[test]
    fn test_item_and_collection_paths_agree() {
        // Collection operations share one path, item operations another.
        assert_eq!(clients::LIST.path, clients::CREATE.path);
        assert_eq!(clients::GET.path, clients::UPDATE.path);
        assert_eq!(clients::GET.path, clients::DELETE.path);
        assert_eq!(developers::LIST.path, developers::CREATE.path);
        assert_eq!(developers::GET.path, developers::DELETE.path);
    }
}
