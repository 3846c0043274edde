//! Canonical records exchanged with the portfolio backend.
//!
//! The backend speaks snake_case (`read_time`, `github_url`, `position`) while older
//! static content used camelCase (`readTime`, `githubUrl`) and numeric ids. Every record
//! here accepts both spellings on input and always serializes the canonical one, so code
//! past this module only ever sees a single schema.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Largest page size the backend accepts for blog listings.
pub const MAX_BLOG_PAGE_SIZE: u32 = 50;

/// Page size used when a section does not ask for one.
pub const DEFAULT_BLOG_PAGE_SIZE: u32 = 10;

/// Error returned when a category label is not part of the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            #[default]
            #[serde(rename = "All")]
            All,
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every filter value in display order, `All` first.
            pub const ALL: &'static [Self] = &[Self::All, $(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    Self::All => "All",
                    $(Self::$variant => $label,)+
                }
            }

            /// Whether a record tagged with `category` passes this filter.
            #[must_use]
            pub fn matches(self, category: &str) -> bool {
                match self {
                    Self::All => true,
                    other => other.as_str() == category,
                }
            }

            /// The value to send as a `category` query parameter, if any.
            #[must_use]
            pub const fn query_value(self) -> Option<&'static str> {
                match self {
                    Self::All => None,
                    other => Some(other.as_str()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|category| category.as_str() == s)
                    .ok_or_else(|| UnknownCategory(s.to_owned()))
            }
        }
    };
}

category_enum! {
    /// Project filter values.
    ProjectCategory {
        FullStack => "Full Stack",
        Frontend => "Frontend",
        DataAnalysis => "Data Analysis",
        WebApplication => "Web Application",
    }
}

category_enum! {
    /// Blog filter values.
    BlogCategory {
        Development => "Development",
        BusinessAnalysis => "Business Analysis",
        Design => "Design",
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        }
    }
}

/// Accepts `"42"`, `42` or `"7f3c..."` and yields the string form.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// [`lenient_id`] for ids the backend may omit or send as `null`.
fn lenient_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

const fn default_rating() -> u8 {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Names of the fields that are blank after trimming.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Acknowledgement returned by the backend for a contact submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactReceipt {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, deserialize_with = "lenient_optional_id")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    pub category: String,
    #[serde(default, alias = "readTime")]
    pub read_time: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub per_page: u32,
}

const fn first_page() -> u32 {
    1
}

const fn default_page_size() -> u32 {
    DEFAULT_BLOG_PAGE_SIZE
}

impl Default for BlogPage {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            total: 0,
            page: first_page(),
            per_page: default_page_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Project {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, alias = "githubUrl")]
    pub github_url: Option<String>,
    #[serde(default, alias = "liveUrl")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub name: String,
    #[serde(alias = "position")]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub content: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

impl Testimonial {
    /// Star count to render, always within `1..=5`.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.rating.clamp(1, 5)
    }
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            avatar: None,
            rating: default_rating(),
        }
    }
}

/// Liveness payload from the backend root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl HealthStatus {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTestimonial {
    pub name: String,
    #[serde(rename = "position")]
    pub role: String,
    pub company: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub featured: bool,
}
