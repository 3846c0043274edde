//! One module per page section, in page order. Each renders a `<section>` whose id is
//! the anchor the navigation scrolls to.

pub mod about;
pub mod blog;
pub mod contact;
pub mod education;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod testimonials;
