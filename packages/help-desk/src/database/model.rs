use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::models::schema::{mentor_ratings, mentors, requests, users};

// ==================== Mentors ====================

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mentors)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbMentor {
    pub telegram_id: String,
    pub username: String,
    pub assigned_tables: Vec<i32>,
    pub total_requests_served: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = mentors)]
pub struct NewMentor<'a> {
    pub telegram_id: &'a str,
    pub username: &'a str,
    pub assigned_tables: Vec<i32>,
    pub total_requests_served: i32,
    pub created_at: DateTime<Utc>,
}

// ==================== Mentor Ratings ====================
// One row per accepted request; rating stays NULL until the attendee
// submits one, then the same row is filled in place.

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = mentor_ratings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbMentorRating {
    pub id: i32,
    pub mentor_tg: String,
    pub request_number: i32,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = mentor_ratings)]
pub struct NewMentorRating<'a> {
    pub mentor_tg: &'a str,
    pub request_number: i32,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
}

// ==================== Requests ====================

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = requests)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbRequest {
    pub request_number: i32,
    pub table_no: i32,
    pub user_name: String,
    pub user_tg: String,
    pub mentor_tg: Option<String>,
    pub status: String,
    pub rating: Option<i32>,
    pub signature_digest: Option<String>,
    pub signature_address: Option<String>,
    pub transaction_hash: Option<String>,
    pub attestation_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = requests)]
pub struct NewRequest<'a> {
    pub request_number: i32,
    pub table_no: i32,
    pub user_name: &'a str,
    pub user_tg: &'a str,
    pub status: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==================== Users ====================

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbUser {
    pub uid: String,
    pub name: String,
    pub tg_username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub uid: &'a str,
    pub name: &'a str,
    pub tg_username: &'a str,
    pub created_at: DateTime<Utc>,
}
