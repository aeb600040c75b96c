use super::{Faq, HeroCopy, ItemGroup, LabeledValue, Stat, Step};

pub const TITLE: &str = "International Students";
pub const DESCRIPTION: &str = "Information for international students studying at CSF Australia. Learn about student visas, OSHC, English requirements, and student support services.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "International Students",
    "Study in Australia",
    "Experience world-class vocational education in Australia. CSF Australia welcomes students from around the globe.",
);

pub const KEY_FACTS: [Stat; 4] = [
    Stat {
        value: "CRICOS",
        label: "Registered Provider",
        note: Some("Code: 0XXXXX"),
    },
    Stat::new("30+", "Countries Represented"),
    Stat::new("IELTS 5.5", "Min. English Requirement"),
    Stat::new("2 intakes", "Per Year"),
];

pub const STEPS: [Step; 6] = [
    Step::new(
        1,
        "Choose Your Course",
        "Browse our CRICOS-registered courses and choose the qualification that fits your career goals.",
    ),
    Step::new(
        2,
        "Apply Online",
        "Submit your application with certified academic transcripts and English proficiency results.",
    ),
    Step::new(
        3,
        "Receive Offer & CoE",
        "Accept your offer and receive your Confirmation of Enrolment (CoE) to support your visa application.",
    ),
    Step::new(
        4,
        "Apply for Student Visa",
        "Apply for a Student Visa (Subclass 500) through the Department of Home Affairs.",
    ),
    Step::new(
        5,
        "Arrange OSHC",
        "Purchase Overseas Student Health Cover (OSHC) for the duration of your course.",
    ),
    Step::new(
        6,
        "Arrive & Study",
        "Attend orientation, meet your trainers, and begin your studies in Australia.",
    ),
];

pub const VISA_SUMMARY: &str = "To study at CSF Australia, you will need a Student Visa (Subclass 500) issued by the Australian Department of Home Affairs.";

pub const VISA_CONDITIONS: [&str; 4] = [
    "Requires a Confirmation of Enrolment (CoE)",
    "Must maintain satisfactory course progress",
    "Allows work rights of 48 hrs/fortnight during term",
    "OSHC must be maintained for visa duration",
];

pub const OSHC_SUMMARY: &str = "OSHC is mandatory for all international students in Australia and must be maintained for the duration of your student visa. CSF can assist you in arranging OSHC through our approved provider partners.";

pub const ENGLISH_TESTS: [LabeledValue; 5] = [
    LabeledValue::new("IELTS Academic", "5.5 (no band below 5.0)"),
    LabeledValue::new("TOEFL iBT", "46+"),
    LabeledValue::new("PTE Academic", "42+"),
    LabeledValue::new("Cambridge B2 Preliminary", "Pass"),
    LabeledValue::new("OET", "B grade or above"),
];

pub const SUPPORT: [ItemGroup; 3] = [
    ItemGroup {
        title: "Pre-Arrival Support",
        items: &[
            "Visa application guidance",
            "Accommodation assistance",
            "Airport pickup coordination",
            "Pre-arrival orientation materials",
        ],
    },
    ItemGroup {
        title: "On-Campus Support",
        items: &[
            "International student orientation",
            "English language support",
            "Cultural adjustment guidance",
            "Buddy program with domestic students",
        ],
    },
    ItemGroup {
        title: "Ongoing Wellbeing",
        items: &[
            "Counselling and welfare services",
            "Career and employment support",
            "Emergency 24/7 contact line",
            "Social and cultural activities",
        ],
    },
];

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "What English level do I need?",
        answer: "You will need a minimum IELTS Academic score of 5.5 (no band below 5.0), or equivalent in TOEFL iBT (46+), PTE Academic (42+), or Cambridge English (B2 Preliminary).",
    },
    Faq {
        question: "Can I work while studying?",
        answer: "Yes. Student Visa (Subclass 500) holders can work up to 48 hours per fortnight during the academic term and unlimited hours during scheduled breaks.",
    },
    Faq {
        question: "What is OSHC?",
        answer: "Overseas Student Health Cover (OSHC) is mandatory health insurance for international students in Australia. It covers doctor visits, hospitalisation, and some prescription medications.",
    },
    Faq {
        question: "Can I extend my visa to complete the course?",
        answer: "Yes. If your course duration is extended for academic reasons, CSF will support you in applying for a visa extension through the Department of Home Affairs.",
    },
    Faq {
        question: "Is there accommodation available on campus?",
        answer: "CSF does not have on-campus accommodation, but our International Student team can help you find suitable homestay, shared housing, or student accommodation options near our campus.",
    },
];
