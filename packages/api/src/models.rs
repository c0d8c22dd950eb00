//! # Wire models for the Meu Pet Club API
//!
//! These structs mirror the JSON documents the remote server exchanges:
//!
//! - [`Pet`] — a full pet record. The server uses `_id` for identifiers and
//!   camelCase timestamp fields; both are renamed to idiomatic Rust here.
//! - [`Owner`] — the polymorphic owner field. Depending on API expansion the
//!   server embeds a summary object or sends a bare identifier string, so the
//!   type is an explicit union deserialized via `#[serde(untagged)]` and
//!   matched at call sites.
//! - [`PetDraft`] — the editable field set, sent on create and resent in full
//!   on update (full-replace semantics, no partial patch).
//! - [`User`] / [`NewUser`] — account records; the password only ever travels
//!   client → server inside [`NewUser`] and is never read back.
//! - [`SessionRecord`] — the persisted pairing of a user and their bearer
//!   token, also the shape of a successful login response.

use serde::{Deserialize, Serialize};

/// A pet record as returned by the server.
///
/// `id`, `owner` and the timestamps are server-assigned and immutable from
/// the client's perspective; everything else is editable through
/// [`PetDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
    pub owner: Owner,
    pub created_at: String,
    pub updated_at: String,
}

impl Pet {
    /// The editable field set of this record, e.g. to pre-fill an edit form.
    pub fn draft(&self) -> PetDraft {
        PetDraft {
            name: self.name.clone(),
            species: self.species.clone(),
            breed: self.breed.clone(),
            age: self.age,
            weight: self.weight,
            description: self.description.clone(),
        }
    }
}

/// Owner of a pet: an embedded summary when the server expanded the
/// reference, otherwise the bare user identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    Embedded(OwnerSummary),
    Reference(String),
}

impl Owner {
    pub fn id(&self) -> &str {
        match self {
            Owner::Embedded(summary) => &summary.id,
            Owner::Reference(id) => id,
        }
    }

    /// Display name, available only when the owner was embedded.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Owner::Embedded(summary) => Some(&summary.name),
            Owner::Reference(_) => None,
        }
    }
}

/// Owner fields the server embeds into an expanded pet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Editable pet fields, used both for creation and for full-replace updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetDraft {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub description: String,
}

/// An account as returned by the server. Passwords are write-only and never
/// appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Account role; administrators additionally manage user accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "CLIENT")]
    Client,
}

impl Role {
    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }

    /// Localized label shown in the interface.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Client => "Cliente",
        }
    }

    /// The name the server uses on the wire, matching the serde rename.
    pub fn wire_name(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Client => "CLIENT",
        }
    }

    /// Inverse of [`Role::wire_name`]; anything unrecognized falls back to
    /// the least privileged role.
    pub fn from_wire_name(name: &str) -> Self {
        if name == "ADMIN" {
            Role::Admin
        } else {
            Role::Client
        }
    }
}

/// Payload for creating an account (admin-only operation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The persisted pairing of a user identity and their bearer token. Also the
/// body of a successful login response (`access_token` accepted as an alias
/// for servers that name the field that way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pet_deserializes_with_embedded_owner() {
        let raw = serde_json::json!({
            "_id": "p1",
            "name": "Rex",
            "species": "Dog",
            "breed": "Labrador",
            "age": 3,
            "weight": 25.5,
            "description": "Friendly",
            "owner": { "_id": "u1", "name": "Ana", "email": "ana@example.com" },
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-02T00:00:00.000Z"
        });

        let pet: Pet = serde_json::from_value(raw).unwrap();
        assert_eq!(pet.id, "p1");
        assert_eq!(pet.age, 3);
        assert_eq!(pet.created_at, "2024-01-01T00:00:00.000Z");
        assert_eq!(pet.owner.display_name(), Some("Ana"));
        assert_eq!(pet.owner.id(), "u1");
    }

    #[test]
    fn pet_deserializes_with_owner_reference() {
        let raw = serde_json::json!({
            "_id": "p2",
            "name": "Mimi",
            "species": "Cat",
            "breed": "Siamese",
            "age": 2,
            "weight": 4.2,
            "description": "",
            "owner": "u7",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        });

        let pet: Pet = serde_json::from_value(raw).unwrap();
        assert_eq!(pet.owner, Owner::Reference("u7".to_string()));
        assert_eq!(pet.owner.display_name(), None);
        assert_eq!(pet.owner.id(), "u7");
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let raw = serde_json::json!({
            "_id": "p3",
            "name": "Bob",
            "species": "Dog",
            "breed": "Poodle",
            "age": 1,
            "weight": 6.0,
            "owner": "u1",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "updatedAt": "2024-01-01T00:00:00.000Z"
        });

        let pet: Pet = serde_json::from_value(raw).unwrap();
        assert_eq!(pet.description, "");
    }

    #[test]
    fn role_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"CLIENT\"");

        let role: Role = serde_json::from_str("\"CLIENT\"").unwrap();
        assert_eq!(role, Role::Client);
        assert!(!role.is_admin());
    }

    #[test]
    fn wire_name_round_trips_and_matches_serde() {
        for role in [Role::Admin, Role::Client] {
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role.wire_name())
            );
            assert_eq!(Role::from_wire_name(role.wire_name()), role);
        }
        assert_eq!(Role::from_wire_name("garbage"), Role::Client);
    }

    #[test]
    fn draft_carries_only_editable_fields() {
        let pet = Pet {
            id: "p1".to_string(),
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            breed: "Labrador".to_string(),
            age: 3,
            weight: 25.5,
            description: "Friendly".to_string(),
            owner: Owner::Reference("u1".to_string()),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
            updated_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let draft = pet.draft();
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert!(!object.contains_key("_id"));
        assert!(!object.contains_key("owner"));
        assert_eq!(object["name"], "Rex");
    }

    #[test]
    fn login_response_accepts_access_token_alias() {
        let raw = serde_json::json!({
            "access_token": "tok-123",
            "user": { "_id": "u1", "name": "Ana", "email": "ana@example.com", "role": "ADMIN" }
        });

        let record: SessionRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.token, "tok-123");
        assert!(record.user.role.is_admin());
    }
}
