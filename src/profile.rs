//! Static content rendered by the page sections.

pub const NAME: &str = "Nihar Patel";
pub const ROLE: &str = "Software Engineer";
pub const TAGLINE: &str = "I specialize in building exceptional digital experiences. Currently, I'm focused on building responsive web applications using modern technologies.";

pub static ABOUT: [&str; 2] = [
    "I help business owners and busy web developers to design & develop creative websites that fits their vision and attracts the visitors to stay forever. My approach combines technical expertise with creative problem-solving to deliver exceptional results.",
    "With a strong foundation in modern web technologies and a passion for creating seamless user experiences, I bring ideas to life through clean, efficient code and thoughtful design decisions.",
];

pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub static SKILLS: [Skill; 6] = [
    Skill {
        title: "HTML",
        description: "Semantic markup & modern HTML5 features",
        color: "#e34f26",
    },
    Skill {
        title: "CSS",
        description: "Responsive design & animations",
        color: "#1572b6",
    },
    Skill {
        title: "JavaScript",
        description: "ES6+, async/await, DOM manipulation",
        color: "#f7df1e",
    },
    Skill {
        title: "TypeScript",
        description: "Type-safe development & interfaces",
        color: "#3178c6",
    },
    Skill {
        title: "React",
        description: "Hooks, Context, Redux & Next.js",
        color: "#61dafb",
    },
    Skill {
        title: "Git",
        description: "Version control & collaboration",
        color: "#f05032",
    },
];

/// (name, category)
pub static OTHER_SKILLS: [(&str, &str); 8] = [
    ("C/C++", "Languages"),
    ("Java", "Languages"),
    ("REST APIs", "Backend"),
    ("Material-UI", "Frontend"),
    ("Node.js", "Backend"),
    ("MongoDB", "Database"),
    ("Problem Solving", "Soft Skills"),
    ("Team Work", "Soft Skills"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Education,
    Project,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Education => "Education",
            Self::Project => "Project",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Work => "💼",
            Self::Education => "🎓",
            Self::Project => "⭐",
        }
    }
}

pub struct TimelineEntry {
    pub title: &'static str,
    pub organization: &'static str,
    pub duration: &'static str,
    pub highlights: &'static [&'static str],
    pub kind: EntryKind,
    pub technologies: &'static [&'static str],
}

pub static TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry {
        title: "Full Stack Developer",
        organization: "Freelance",
        duration: "2023 - Present",
        highlights: &[
            "Developed responsive web applications using React and Node.js",
            "Implemented secure authentication systems and RESTful APIs",
            "Collaborated with clients to deliver custom solutions",
            "Optimized application performance and user experience",
            "Integrated third-party APIs and services",
        ],
        kind: EntryKind::Work,
        technologies: &["React", "Node.js", "MongoDB", "TypeScript", "AWS"],
    },
    TimelineEntry {
        title: "Open Source Contributor",
        organization: "GitHub Community",
        duration: "2022 - Present",
        highlights: &[
            "Contributed to various open-source projects",
            "Fixed bugs and implemented new features",
            "Collaborated with developers worldwide",
            "Improved documentation and code quality",
        ],
        kind: EntryKind::Work,
        technologies: &["Git", "JavaScript", "Python", "React", "Docker"],
    },
    TimelineEntry {
        title: "Bachelor of Engineering",
        organization: "Government Engineering College, Gandhinagar",
        duration: "2021 - 2025",
        highlights: &[
            "Computer Engineering with specialization in Software Development",
            "CGPA: 8.5/10",
            "Active member of coding club and tech community",
            "Led team in national-level hackathons",
            "Published research paper on ML applications",
        ],
        kind: EntryKind::Education,
        technologies: &["C++", "Java", "Python", "Data Structures", "Algorithms"],
    },
    TimelineEntry {
        title: "Technical Lead",
        organization: "College Tech Festival",
        duration: "2022 - 2023",
        highlights: &[
            "Led a team of 10 developers for college tech fest website",
            "Managed project timeline and deliverables",
            "Implemented real-time event registration system",
            "Achieved 5000+ user registrations",
        ],
        kind: EntryKind::Project,
        technologies: &["Next.js", "Firebase", "Material-UI", "Redux", "Node.js"],
    },
    TimelineEntry {
        title: "Web Development Intern",
        organization: "Tech Startup",
        duration: "Summer 2023",
        highlights: &[
            "Developed and maintained client-facing applications",
            "Implemented responsive designs and UI components",
            "Worked with agile development methodologies",
            "Participated in code reviews and team meetings",
        ],
        kind: EntryKind::Work,
        technologies: &["React", "Vue.js", "GraphQL", "Tailwind CSS"],
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub live_link: &'static str,
    pub github_link: &'static str,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "My Bolt",
        description: "A high-performance web application designed to revolutionize user experience with modern design principles and optimized performance.",
        features: &[
            "Real-time data synchronization",
            "Optimized performance with React.js",
            "Responsive design for all devices",
            "Modern UI/UX with Bootstrap",
        ],
        tech: &["React.js", "Bootstrap", "JavaScript", "REST API"],
        image: "/images/project1.jpg",
        live_link: "https://mybolt.com",
        github_link: "https://github.com/yourusername/mybolt",
    },
    Project {
        title: "Sizzle Food Ordering",
        description: "A comprehensive food delivery platform that combines real-time tracking with an intuitive ordering system.",
        features: &[
            "Real-time order tracking system",
            "Secure payment integration",
            "Location-based delivery",
            "User authentication & profiles",
        ],
        tech: &["React", "Node.js", "MongoDB", "Express", "Socket.io"],
        image: "/images/project2.jpg",
        live_link: "https://sizzle.com",
        github_link: "https://github.com/yourusername/sizzle",
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Saatvik Nagpal",
        role: "Founder",
        company: "EazyGrad",
        content: "Nihar is a talented, committed individual who will leave no stone unturned in his pursuit to provide the best. His attention to detail and in-depth experience in web development is indeed commendable. He has exhibited exemplary skills in the field, and I hope to see all the great projects coming up!",
        rating: 5,
    },
    Testimonial {
        name: "Kira Bragg",
        role: "English Mentor",
        company: "Web Dev English",
        content: "Nihar was a wonderful developer to work with! He anticipated everything I needed to consider for my website. He also went the extra mile and added details that I hadn't considered! He is helping my business grow, and I will definitely work with him again!",
        rating: 5,
    },
    Testimonial {
        name: "Srihari Kestur",
        role: "Founder",
        company: "Harigurus",
        content: "I worked with Nihar to make my website. I am speechless by looking at his work ethic and dedication. Working with him was the best decision I made. His technical expertise and creative approach brought my vision to life perfectly.",
        rating: 5,
    },
    Testimonial {
        name: "Alex Chen",
        role: "Tech Lead",
        company: "InnovateTech Solutions",
        content: "Working with Nihar was an exceptional experience. His deep understanding of modern web technologies and ability to deliver clean, efficient code sets him apart. He not only met our technical requirements but also brought innovative solutions to enhance our project's performance and user experience.",
        rating: 5,
    },
];

impl Testimonial {
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

pub struct ContactChannel {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub static CONTACT_CHANNELS: [ContactChannel; 5] = [
    ContactChannel {
        title: "Email",
        value: "niharp214@gmail.com",
        link: "mailto:niharp214@gmail.com",
        icon: "extra-email",
        color: "#64ffda",
    },
    ContactChannel {
        title: "Phone",
        value: "+91 9726731007",
        link: "tel:+919726731007",
        icon: "extra-phone",
        color: "#00bcd4",
    },
    ContactChannel {
        title: "LinkedIn",
        value: "Nihar Patel",
        link: "https://linkedin.com/in/nihar-patel-8a5375206/",
        icon: "devicon-linkedin-plain",
        color: "#0077b5",
    },
    ContactChannel {
        title: "GitHub",
        value: "@niharpatel",
        link: "https://github.com/niharpatel",
        icon: "devicon-github-plain",
        color: "#6e5494",
    },
    ContactChannel {
        title: "Location",
        value: "Gujarat, India",
        link: "https://goo.gl/maps/YOUR_LOCATION",
        icon: "extra-location",
        color: "#ff4081",
    },
];

/// (label, icon class, url)
pub static SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("GitHub", "devicon-github-plain", "https://github.com/Nihar-2104"),
    (
        "LinkedIn",
        "devicon-linkedin-plain",
        "https://linkedin.com/in/nihar-patel-8a5375206/",
    ),
    ("X", "extra-x", "https://x.com/yourusername"),
    ("Instagram", "extra-instagram", "https://instagram.com/nihar._.2104/"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_star_rating() {
        assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
        let three = Testimonial {
            rating: 3,
            ..TESTIMONIALS[1]
        };
        assert_eq!(three.stars(), "★★★☆☆");
    }
}
