use crate::models::{SocialLinks, TeamCategory, TeamMember, WebTeamMember};

const AVATAR_PNG: &str =
    "https://www.pngitem.com/pimgs/m/22-220721_circled-user-male-type-user-colorful-icon-png.png";
const AVATAR_JPG: &str =
    "https://static.vecteezy.com/system/resources/previews/000/439/863/original/vector-users-icon.jpg";
const PLACEHOLDER: &str = "/placeholder.svg?height=400&width=400";

fn member(
    id: u32,
    name: &str,
    role: &str,
    image: &str,
    bio: &str,
    category: TeamCategory,
) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
        bio: bio.to_string(),
        social: SocialLinks::placeholder(),
        category,
        years: None,
    }
}

fn alumnus(id: u32, name: &str, role: &str, bio: &str, years: &str) -> TeamMember {
    TeamMember {
        years: Some(years.to_string()),
        ..member(id, name, role, PLACEHOLDER, bio, TeamCategory::Past)
    }
}

#[rustfmt::skip]
pub fn executives() -> Vec<TeamMember> {
    use TeamCategory::Executive;
    vec![
        member(1, "Alex Chen", "President", AVATAR_PNG,
            "Full-stack developer with a passion for AI and machine learning.", Executive),
        member(2, "Samantha Kim", "Vice President", AVATAR_PNG,
            "Cybersecurity specialist and competitive programmer.", Executive),
        member(3, "Marcus Johnson", "Technical Lead", AVATAR_JPG,
            "Backend developer with expertise in distributed systems.", Executive),
        member(4, "Priya Patel", "Design Lead", PLACEHOLDER,
            "UI/UX designer with a background in frontend development.", Executive),
    ]
}

#[rustfmt::skip]
pub fn associates() -> Vec<TeamMember> {
    use TeamCategory::Associate;
    vec![
        member(5, "John Doe", "Frontend Developer", PLACEHOLDER,
            "Frontend developer specializing in React and Next.js.", Associate),
        member(6, "Jane Smith", "Backend Developer", PLACEHOLDER,
            "Backend developer with expertise in Node.js and Python.", Associate),
        member(7, "David Wilson", "Mobile Developer", PLACEHOLDER,
            "Mobile app developer focused on cross-platform solutions.", Associate),
        member(8, "Maria Rodriguez", "UI/UX Designer", PLACEHOLDER,
            "UI/UX designer passionate about creating intuitive user experiences.", Associate),
        member(9, "James Taylor", "Data Scientist", PLACEHOLDER,
            "Data scientist with expertise in machine learning and data analytics.", Associate),
        member(10, "Emily White", "Quality Assurance", PLACEHOLDER,
            "QA specialist ensuring high-quality software delivery.", Associate),
    ]
}

#[rustfmt::skip]
pub fn past_members() -> Vec<TeamMember> {
    vec![
        alumnus(101, "Eleanor Wright", "Founding President",
            "Founded the club in 2018 and established our core technical direction.", "2018-2020"),
        alumnus(102, "Michael Zhang", "Technical Architect",
            "Designed our first cloud infrastructure and mentored numerous members.", "2019-2021"),
        alumnus(103, "Sophia Lee", "Innovation Lead",
            "Pioneered our AI research initiatives and led multiple award-winning projects.", "2018-2022"),
        alumnus(104, "Robert Jackson", "Outreach Director",
            "Established partnerships with industry leaders and expanded our network.", "2020-2023"),
    ]
}

#[rustfmt::skip]
pub fn admin_team() -> Vec<TeamMember> {
    vec![
        member(1, "Alex Chen", "President", AVATAR_PNG,
            "Full-stack developer with a passion for AI and machine learning.",
            TeamCategory::Executive),
        member(2, "Jamie Lee", "Software Engineer", AVATAR_PNG,
            "Specializes in backend development and cloud computing.",
            TeamCategory::Associate),
        member(3, "Taylor Kim", "Tech Visionary", AVATAR_PNG,
            "Innovator in the field of augmented reality and virtual reality.",
            TeamCategory::TechVisionary),
    ]
}

#[rustfmt::skip]
pub fn web_team() -> Vec<WebTeamMember> {
    let dev = |id, name: &str, role: &str, photo: &str, description: &str| WebTeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        photo: format!("/team/{photo}.jpg"),
        description: description.to_string(),
    };
    vec![
        dev(1, "Alex Chen", "Lead Developer", "developer-1",
            "Full-stack developer with 5+ years of experience specializing in React and Node.js. Leads architecture decisions and mentors junior developers."),
        dev(2, "Priya Patel", "UI/UX Designer", "designer-1",
            "Creative designer with an eye for detail and user-centric approach. Transforms complex requirements into intuitive, accessible interfaces."),
        dev(3, "Marcus Johnson", "Backend Developer", "developer-2",
            "Database expert and API architect who ensures our systems are robust, secure, and scalable. Specializes in performance optimization."),
        dev(4, "Sophie Kim", "Frontend Developer", "developer-3",
            "Animation and interaction specialist who creates seamless user experiences. Passionate about accessibility and responsive design."),
        dev(5, "David Rodriguez", "Mobile Developer", "developer-4",
            "Cross-platform mobile expert who bridges the gap between web and native applications. Focuses on performance and offline capabilities."),
        dev(6, "Emma Wilson", "AI Integration Specialist", "developer-5",
            "Combines ML models with web applications to create intelligent user experiences. Passionate about ethical AI and data privacy."),
        dev(7, "Michael Novak", "PHP Developer", "developer-6",
            "Experienced PHP developer specializing in Laravel and WordPress. Creates robust backend solutions and maintains legacy systems with modern best practices."),
        dev(8, "Sarah Thompson", "PHP/CMS Specialist", "developer-7",
            "Expert in PHP-based content management systems including WordPress, Drupal, and custom CMS solutions. Focuses on security and performance optimization."),
    ]
}
