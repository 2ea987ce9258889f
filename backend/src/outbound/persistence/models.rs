//! Internal Diesel row structs for `tb_user`.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain types.

use diesel::prelude::*;

use crate::domain::{User, UserDraft, UserId};

use super::schema::tb_user;

/// Row struct for reading from `tb_user`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tb_user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        let UserRow {
            id,
            username,
            email,
        } = row;
        Self::new(UserId::new(id), UserDraft::new(username, email))
    }
}

/// Insertable and changeset struct; `id` is left to the sequence.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tb_user)]
pub(crate) struct UserFieldsRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a UserDraft> for UserFieldsRow<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            username: draft.username(),
            email: draft.email(),
        }
    }
}
