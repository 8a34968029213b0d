//! Shared destination types for tests and examples.
//!
//! The registries here are written by hand, which doubles as a reference
//! for what `#[derive(Bindable)]` generates. The [`Author`] graph covers
//! every field shape the resolver and setter handle: leaf scalars,
//! optionals, a string alias, nested and optional-nested records, growable
//! sequences, and read-only/private markers.

use chrono::{DateTime, Utc};

use crate::{Bindable, Field, Slot, StringAlias};

/// A named text type bound verbatim through [`StringAlias`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slug(pub String);

impl StringAlias for Slug {
    fn set_str(&mut self, value: &str) {
        self.0 = value.to_string();
    }
}

/// Per-author display settings; a plain nested record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// IANA timezone name.
    pub timezone: String,
    /// Posts per page.
    pub page_size: u32,
}

impl Bindable for Settings {
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "timezone" => Some(Field::Slot(Slot::Text(&mut self.timezone))),
            "page_size" => Some(Field::Slot(Slot::U32(&mut self.page_size))),
            _ => None,
        }
    }
}

/// An optional nested record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    /// Free-form biography.
    pub bio: String,
    /// Optional homepage URL.
    pub website: Option<String>,
}

impl Bindable for Profile {
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "bio" => Some(Field::Slot(Slot::Text(&mut self.bio))),
            "website" => Some(Field::Slot(Slot::OptText(&mut self.website))),
            _ => None,
        }
    }
}

/// A reader comment; element of the nested sequence on [`Post`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment {
    /// Comment body.
    pub message: String,
    /// Upvote count.
    pub score: i32,
}

impl Bindable for Comment {
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "message" => Some(Field::Slot(Slot::Text(&mut self.message))),
            "score" => Some(Field::Slot(Slot::I32(&mut self.score))),
            _ => None,
        }
    }
}

/// A blog post; element of the sequence on [`Author`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    /// Post title.
    pub title: String,
    /// Upvote count.
    pub upvotes: i64,
    /// Publication instant, unset while drafted.
    pub published_at: Option<DateTime<Utc>>,
    /// Reader comments.
    pub comments: Vec<Comment>,
}

impl Bindable for Post {
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "title" => Some(Field::Slot(Slot::Text(&mut self.title))),
            "upvotes" => Some(Field::Slot(Slot::I64(&mut self.upvotes))),
            "published_at" => Some(Field::Slot(Slot::OptTimestamp(&mut self.published_at))),
            "comments" => Some(Field::Slice(&mut self.comments)),
            _ => None,
        }
    }
}

/// The root destination object used across the test suites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Author {
    /// Database identifier; registered read-only.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: i64,
    /// Average review rating.
    pub rating: f64,
    /// Account enabled flag.
    pub active: bool,
    /// Optional nickname.
    pub nickname: Option<String>,
    /// URL slug; a named text type.
    pub slug: Slug,
    /// Account creation instant.
    pub created_at: DateTime<Utc>,
    /// Soft-delete instant, unset while the account is live.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Display settings.
    pub settings: Settings,
    /// Optional public profile.
    pub profile: Option<Profile>,
    /// Authored posts.
    pub posts: Vec<Post>,
    /// Credential digest; registered private and never bindable.
    pub password_hash: String,
}

impl Bindable for Author {
    fn field_mut(&mut self, name: &str) -> Option<Field<'_>> {
        match name {
            "id" => Some(Field::ReadOnly),
            "name" => Some(Field::Slot(Slot::Text(&mut self.name))),
            "age" => Some(Field::Slot(Slot::I64(&mut self.age))),
            "rating" => Some(Field::Slot(Slot::F64(&mut self.rating))),
            "active" => Some(Field::Slot(Slot::Bool(&mut self.active))),
            "nickname" => Some(Field::Slot(Slot::OptText(&mut self.nickname))),
            "slug" => Some(Field::Slot(Slot::Alias(&mut self.slug))),
            "created_at" => Some(Field::Slot(Slot::Timestamp(&mut self.created_at))),
            "deleted_at" => Some(Field::Slot(Slot::OptTimestamp(&mut self.deleted_at))),
            "settings" => Some(Field::Struct(&mut self.settings)),
            "profile" => Some(match self.profile.as_mut() {
                Some(profile) => Field::Struct(profile),
                None => Field::Unset,
            }),
            "posts" => Some(Field::Slice(&mut self.posts)),
            "password_hash" => Some(Field::Private),
            _ => None,
        }
    }
}
