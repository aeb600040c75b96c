use super::{Cta, HeroCopy, Highlight, Stat, Testimonial};

/// Used verbatim; the home page does not go through the title template.
pub const TITLE: &str = "Study Sport & Fitness in Australia | CSF Australia";
pub const DESCRIPTION: &str = "Start your career in fitness, sport, and health with CSF Australia's nationally recognised RTO qualifications. Courses in fitness, coaching, and sport management.";

pub const HERO: HeroCopy = HeroCopy {
    title: "Study Sport & Fitness in Australia",
    subtitle: Some("Registered Training Organisation"),
    description: Some("Launch your career in fitness, sport coaching, and health with nationally recognised qualifications from CSF Australia."),
    primary_cta: Some(Cta {
        label: "Explore Courses",
        href: "/courses",
    }),
    secondary_cta: Some(Cta {
        label: "Apply Now",
        href: "/admissions",
    }),
    compact: false,
};

/// Number of catalog entries shown under "Our Courses".
pub const FEATURED_COURSES: usize = 3;

pub const STATS: [Stat; 4] = [
    Stat::new("95%", "Graduate Employment Rate"),
    Stat::new("500+", "Students Enrolled Annually"),
    Stat::new("10+", "Years of Excellence"),
    Stat::new("5★", "Average Student Rating"),
];

pub const WHY_CSF: [Highlight; 4] = [
    Highlight::new(
        "Nationally Recognised Qualifications",
        "All courses are nationally accredited under the Australian Qualifications Framework (AQF) and recognised across Australia.",
    ),
    Highlight::new(
        "Expert Industry Trainers",
        "Learn from practising industry professionals with real-world experience in fitness, sport, and health sectors.",
    ),
    Highlight::new(
        "Modern Facilities",
        "Access to state-of-the-art fitness facilities, sports courts, and equipment to support your hands-on training.",
    ),
    Highlight::new(
        "International Student Support",
        "Dedicated support services for international students including visa guidance, OSHC, and cultural adjustment assistance.",
    ),
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "The Certificate IV in Fitness at CSF gave me the confidence and skills to launch my personal training business. The trainers were incredibly supportive.",
        author: "Sarah M.",
        role: "Personal Trainer & CSF Graduate",
    },
    Testimonial {
        quote: "As an international student, the support I received at CSF was outstanding. From visa help to finding accommodation, they were there every step of the way.",
        author: "Kenji T.",
        role: "Diploma of Sport Graduate",
    },
    Testimonial {
        quote: "The industry connections I made through CSF's placement program led directly to my current role as a Sport Development Officer.",
        author: "Emma R.",
        role: "Sport Development Officer & CSF Graduate",
    },
];
