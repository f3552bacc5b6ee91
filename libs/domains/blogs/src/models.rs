use chrono::{DateTime, Utc};
use mongodb::bson::{self, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Blog entity as stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Blog {
    /// Create a new blog from CreateBlog DTO with a fresh id and matching timestamps
    ///
    /// Timestamps are taken at millisecond precision, the resolution of a BSON date.
    pub fn new(input: CreateBlog) -> Self {
        let now = bson::DateTime::now().to_chrono();
        Self {
            id: ObjectId::new(),
            created_at: now,
            updated_at: now,
            title: input.title,
            category: input.category,
            content: input.content,
            tags: input.tags,
        }
    }
}

/// JSON representation of a blog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    /// 24-character hexadecimal identifier
    #[schema(example = "6650b1f0c0a8f3a1d2e4b5c6")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub category: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.to_hex(),
            created_at: blog.created_at,
            updated_at: blog.updated_at,
            title: blog.title,
            category: blog.category,
            content: blog.content,
            tags: blog.tags,
        }
    }
}

/// DTO for creating a new blog
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBlog {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub content: String,
    pub tags: Vec<String>,
}

/// An optional update value that is either absent or explicitly present
///
/// Unlike `Option`, a present empty string stays distinguishable from a
/// field that was never sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Present(value) => Field::Present(value),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Absent => None,
            Field::Present(value) => Some(value),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

// Missing keys are handled by `#[serde(default)]`; any key that is present
// deserializes as `Present`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Field::Present)
    }
}

/// DTO for a partial update; only present fields are written
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBlog {
    /// Taken from the request path
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub category: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Field<Vec<String>>,
}

impl UpdateBlog {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Present(title.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Field::Present(category.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Field::Present(content.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Field::Present(tags);
        self
    }

    /// Whether at least one optional field is present
    pub fn has_changes(&self) -> bool {
        self.title.is_present()
            || self.category.is_present()
            || self.content.is_present()
            || self.tags.is_present()
    }
}

/// Response body of a successful create
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Identifier of the new blog
    #[schema(example = "6650b1f0c0a8f3a1d2e4b5c6")]
    pub data: String,
}

/// Query parameters for listing blogs
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BlogQuery {
    /// Case-insensitive search over title, content and category
    pub term: Option<String>,
}
