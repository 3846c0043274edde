//! Static content for the portfolio.
//!
//! Everything here is compiled in. The personal record, skills and education are only
//! ever shown from this module; projects, testimonials and blog posts are also served by
//! the backend and fall back to the copies below when it cannot deliver.

use portfolio_api::types::{BlogCategory, BlogPost, Project, ProjectCategory, Testimonial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub portfolio: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub technologies: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationStatus {
    Completed,
    Ongoing,
}

impl EducationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Ongoing => "Ongoing",
        }
    }

    /// Tailwind classes for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "bg-green-600/20 text-green-400 border-green-500/30",
            Self::Ongoing => "bg-blue-600/20 text-blue-400 border-blue-500/30",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub status: EducationStatus,
}

/// A titled blurb, used for achievements and the About highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Avery Quinn",
    title: "Software Engineer & Business Analyst",
    location: "Portland, Oregon",
    email: "hello@averyquinn.example",
    phone: "+1 555 010 4477",
    linkedin: "https://www.linkedin.com/in/avery-quinn-example",
    github: "https://github.com/avery-quinn-example",
    portfolio: "https://averyquinn.example",
    bio: "A proactive software engineer and business analyst with a strong foundation in web \
          development, user experience design and data-driven decision making. I combine \
          development and analysis to build scalable digital products that matter.",
};

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Full-Stack Development",
        description: "Modern web stacks from the database to the browser.",
    },
    Highlight {
        title: "Business Analysis",
        description: "Turning business needs into clear technical requirements.",
    },
    Highlight {
        title: "Team Collaboration",
        description: "Agile delivery with cross-functional teams.",
    },
    Highlight {
        title: "Problem Solving",
        description: "Critical thinking for messy, real-world problems.",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend Development",
        technologies: &["HTML5", "CSS3", "JavaScript", "React", "Tailwind CSS"],
    },
    SkillGroup {
        category: "Backend Development",
        technologies: &["Rust", "Python", "PHP", "Laravel", "PostgreSQL", "MySQL"],
    },
    SkillGroup {
        category: "UI/UX Design",
        technologies: &["Figma", "Wireframing", "Prototyping", "User Research"],
    },
    SkillGroup {
        category: "Business Analysis",
        technologies: &["SDLC", "Agile/Scrum", "Requirements Gathering", "Process Modeling"],
    },
    SkillGroup {
        category: "Database & Tools",
        technologies: &["Database Design", "Git", "Docker", "Project Management"],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Sc. (Hons) Computer Science in Software Engineering",
        institution: "Riverside Institute of Technology",
        period: "Aug 2025 - Oct 2026",
        status: EducationStatus::Ongoing,
    },
    Education {
        degree: "Higher National Diploma in Software Engineering",
        institution: "Riverside Institute of Technology",
        period: "Sep 2023 - Jul 2025",
        status: EducationStatus::Completed,
    },
    Education {
        degree: "Diploma in Full-Stack Development",
        institution: "Cascade Open University",
        period: "Jan 2025 - Jan 2026",
        status: EducationStatus::Ongoing,
    },
];

pub const ACHIEVEMENTS: &[Highlight] = &[
    Highlight {
        title: "Dean's List",
        description: "Recognised for academic performance across three consecutive terms.",
    },
    Highlight {
        title: "Hackathon Finalist",
        description: "Built a logistics dashboard in 36 hours with a team of four.",
    },
    Highlight {
        title: "Technical Proficiency",
        description: "A strong grounding in computing and analytical subjects from early on.",
    },
];

/// Page anchors in navigation order, paired with their menu labels.
///
/// The empty anchor is the top of the page.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("blog", "Blog"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

struct StaticProject {
    id: u32,
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    category: ProjectCategory,
    image: &'static str,
    featured: bool,
}

const PROJECTS: &[StaticProject] = &[
    StaticProject {
        id: 1,
        title: "E-Commerce Platform",
        description: "A full-stack storefront with authentication, product management and \
                      payment integration.",
        technologies: &["React", "Laravel", "MySQL", "Bootstrap"],
        category: ProjectCategory::FullStack,
        image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
        featured: true,
    },
    StaticProject {
        id: 2,
        title: "Business Analytics Dashboard",
        description: "Interactive business intelligence dashboard with reporting and \
                      real-time charts.",
        technologies: &["Python", "React", "PostgreSQL", "Chart.js"],
        category: ProjectCategory::DataAnalysis,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
        featured: true,
    },
    StaticProject {
        id: 3,
        title: "Task Management System",
        description: "Collaborative task tracking with live updates and team workspaces.",
        technologies: &["React", "PHP", "MySQL", "WebSockets"],
        category: ProjectCategory::WebApplication,
        image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
        featured: false,
    },
    StaticProject {
        id: 4,
        title: "Mobile-First Portfolio",
        description: "A responsive portfolio tuned for small screens and fast first paint.",
        technologies: &["React", "CSS3", "JavaScript"],
        category: ProjectCategory::Frontend,
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop",
        featured: false,
    },
];

impl From<&StaticProject> for Project {
    fn from(project: &StaticProject) -> Self {
        Self {
            id: project.id.to_string(),
            title: project.title.to_owned(),
            description: project.description.to_owned(),
            technologies: project
                .technologies
                .iter()
                .map(|tech| (*tech).to_owned())
                .collect(),
            category: project.category.as_str().to_owned(),
            image: Some(project.image.to_owned()),
            github_url: Some("#".to_owned()),
            live_url: Some("#".to_owned()),
            featured: project.featured,
        }
    }
}

struct StaticTestimonial {
    id: u32,
    name: &'static str,
    role: &'static str,
    company: &'static str,
    content: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: &[StaticTestimonial] = &[
    StaticTestimonial {
        id: 1,
        name: "Sarah Johnson",
        role: "Project Manager",
        company: "Northwind Solutions",
        content: "Avery's technical depth combined with sharp business analysis made them \
                  invaluable. They bridge technical requirements and business needs with ease.",
        avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop",
    },
    StaticTestimonial {
        id: 2,
        name: "Michael Chen",
        role: "Senior Developer",
        company: "Digital Innovations Ltd.",
        content: "Excellent code quality and a keen eye for user experience. I would happily \
                  work with Avery again on any project.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop",
    },
    StaticTestimonial {
        id: 3,
        name: "Emily Rodriguez",
        role: "UX Designer",
        company: "Creative Agency Pro",
        content: "Avery understands both implementation and user needs, which made design \
                  handoffs painless and the end product better.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop",
    },
];

impl From<&StaticTestimonial> for Testimonial {
    fn from(testimonial: &StaticTestimonial) -> Self {
        Self {
            id: testimonial.id.to_string(),
            name: testimonial.name.to_owned(),
            role: testimonial.role.to_owned(),
            company: testimonial.company.to_owned(),
            content: testimonial.content.to_owned(),
            avatar: Some(testimonial.avatar.to_owned()),
            ..Self::default()
        }
    }
}

struct StaticPost {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    date: &'static str,
    category: BlogCategory,
    read_time: &'static str,
    image: &'static str,
}

const BLOG_POSTS: &[StaticPost] = &[
    StaticPost {
        id: 1,
        title: "The Future of Full-Stack Development",
        excerpt: "Emerging trends in full-stack development and how they shape the next \
                  generation of web applications.",
        content: "Server rendering is back, type systems are everywhere and the line \
                  between frontend and backend keeps moving. This post walks through the \
                  shifts worth paying attention to and what they mean for small teams.",
        date: "2025-01-15",
        category: BlogCategory::Development,
        read_time: "5 min read",
        image: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=600&h=300&fit=crop",
    },
    StaticPost {
        id: 2,
        title: "Business Analysis in Software Development",
        excerpt: "How business analysis improves delivery and leads to better solutions.",
        content: "Requirements are rarely wrong, they are usually incomplete. A short \
                  discovery phase with the right questions saves weeks of rework later.",
        date: "2025-01-10",
        category: BlogCategory::BusinessAnalysis,
        read_time: "7 min read",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=300&fit=crop",
    },
    StaticPost {
        id: 3,
        title: "Modern UI/UX Design Principles",
        excerpt: "Principles for building intuitive, engaging interfaces.",
        content: "Hierarchy, feedback and restraint carry most interfaces. The rest is \
                  consistency and listening to the people who use the product.",
        date: "2025-01-05",
        category: BlogCategory::Design,
        read_time: "4 min read",
        image: "https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=600&h=300&fit=crop",
    },
];

impl From<&StaticPost> for BlogPost {
    fn from(post: &StaticPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.to_owned(),
            excerpt: post.excerpt.to_owned(),
            content: post.content.to_owned(),
            date: post.date.to_owned(),
            category: post.category.as_str().to_owned(),
            read_time: post.read_time.to_owned(),
            image: Some(post.image.to_owned()),
        }
    }
}

#[must_use]
pub fn projects() -> Vec<Project> {
    projects_for(ProjectCategory::All)
}

/// Catalog projects that pass `category`.
#[must_use]
pub fn projects_for(category: ProjectCategory) -> Vec<Project> {
    PROJECTS
        .iter()
        .filter(|project| category.matches(project.category.as_str()))
        .map(Project::from)
        .collect()
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    TESTIMONIALS.iter().map(Testimonial::from).collect()
}

#[must_use]
pub fn blog_posts() -> Vec<BlogPost> {
    blog_posts_for(BlogCategory::All)
}

/// Catalog posts that pass `category`, newest first.
#[must_use]
pub fn blog_posts_for(category: BlogCategory) -> Vec<BlogPost> {
    BLOG_POSTS
        .iter()
        .filter(|post| category.matches(post.category.as_str()))
        .map(BlogPost::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_category_has_catalog_content() {
        for category in ProjectCategory::ALL {
            assert!(
                !projects_for(*category).is_empty(),
                "no catalog projects for {category}"
            );
        }
    }

    #[test]
    fn test_projects_for_filters_exactly() {
        let all = projects();
        assert_eq!(all.len(), PROJECTS.len());

        let frontend = projects_for(ProjectCategory::Frontend);
        assert!(frontend.iter().all(|p| p.category == "Frontend"));
        assert_eq!(
            frontend.len(),
            all.iter().filter(|p| p.category == "Frontend").count()
        );
    }

    #[test]
    fn test_two_featured_projects() {
        assert_eq!(projects().iter().filter(|p| p.featured).count(), 2);
    }

    #[test]
    fn test_blog_posts_for_development() {
        let posts = blog_posts_for(BlogCategory::Development);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "The Future of Full-Stack Development");
        assert_eq!(posts[0].read_time, "5 min read");
    }

    #[test]
    fn test_blog_posts_are_newest_first() {
        let dates: Vec<_> = blog_posts().into_iter().map(|post| post.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_testimonials_default_to_five_stars() {
        let testimonials = testimonials();
        assert_eq!(testimonials.len(), 3);
        assert!(testimonials.iter().all(|t| t.stars() == 5));
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let mut ids: Vec<_> = projects().into_iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_nav_links_start_at_top_of_page() {
        assert_eq!(NAV_LINKS.first(), Some(&("", "Home")));
        assert_eq!(NAV_LINKS.len(), 8);
    }
}
