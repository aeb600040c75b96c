use super::{HeroCopy, Highlight, LabeledValue};

pub const TITLE: &str = "About CSF Australia";
pub const DESCRIPTION: &str = "Learn about the College of Sport & Fitness Australia — our history, mission, accreditation, RTO status, facilities, and the team behind our courses.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "About CSF Australia",
    "Who We Are",
    "Empowering the next generation of fitness and sport professionals through quality vocational education.",
);

pub const MISSION: &str = "To deliver nationally recognised, industry-relevant vocational training that equips students with the practical skills and knowledge to build successful careers in fitness, sport, and health.";
pub const VISION: &str = "To be Australia's leading RTO for fitness and sport education, known for graduate quality, industry connections, and student support excellence.";

pub const VALUES: [&str; 5] = ["Excellence", "Integrity", "Inclusion", "Innovation", "Respect"];

pub const ACCREDITATION: [LabeledValue; 5] = [
    LabeledValue::new("RTO Number", "XXXXX"),
    LabeledValue::new("Registered With", "Australian Skills Quality Authority (ASQA)"),
    LabeledValue::new(
        "Qualifications Framework",
        "Australian Qualifications Framework (AQF)",
    ),
    LabeledValue::new("CRICOS Code", "0XXXXX"),
    LabeledValue::new("ABN", "XX XXX XXX XXX"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub event: &'static str,
}

pub const TIMELINE: [Milestone; 6] = [
    Milestone {
        year: "2010",
        event: "CSF Australia founded in Sydney with a vision to deliver world-class vocational fitness education.",
    },
    Milestone {
        year: "2012",
        event: "Achieved Registered Training Organisation (RTO) status with ASQA.",
    },
    Milestone {
        year: "2015",
        event: "Expanded course offerings to include sport coaching and recreation qualifications.",
    },
    Milestone {
        year: "2018",
        event: "Opened new state-of-the-art fitness facility in the Sydney CBD campus.",
    },
    Milestone {
        year: "2020",
        event: "Launched online and blended learning delivery to support flexible study.",
    },
    Milestone {
        year: "2023",
        event: "Exceeded 500 annual enrolments and celebrated our 1,000th graduate.",
    },
];

pub const FACILITIES: [Highlight; 5] = [
    Highlight::new(
        "Commercial Gym Floor",
        "Over 200 sq metres of commercial-grade gym equipment for practical training sessions.",
    ),
    Highlight::new(
        "Group Fitness Studio",
        "Dedicated studio space for group exercise classes, dance, and functional training.",
    ),
    Highlight::new(
        "Sports Courts",
        "Indoor multi-purpose courts for sport coaching practicals and athletic development.",
    ),
    Highlight::new(
        "Learning Centre",
        "Modern computer labs, library resources, and quiet study spaces for student use.",
    ),
    Highlight::new(
        "Student Common Room",
        "Relaxed common area with kitchen facilities for students to connect and collaborate.",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

impl StaffMember {
    /// First character of the name, shown in the avatar circle.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

pub const STAFF: [StaffMember; 4] = [
    StaffMember {
        name: "Dr. Claire Morrison",
        role: "Chief Executive Officer",
        bio: "With 20+ years in vocational education, Claire leads CSF's mission to deliver excellence in fitness and sport education.",
    },
    StaffMember {
        name: "James Thornton",
        role: "Head of Fitness Training",
        bio: "An elite certified personal trainer and exercise scientist, James oversees all fitness programs and trainer development.",
    },
    StaffMember {
        name: "Priya Sharma",
        role: "International Student Coordinator",
        bio: "Priya supports international students through every step of their journey, from application to graduation.",
    },
    StaffMember {
        name: "Marcus Williams",
        role: "Sport & Coaching Lead",
        bio: "A former professional athlete and certified coach, Marcus brings real-world experience to all sport coaching programs.",
    },
];
