use super::{HeroCopy, RateRow, Step};

pub const TITLE: &str = "Admissions";
pub const DESCRIPTION: &str = "How to apply to CSF Australia. Entry requirements, fees, scholarships, intake dates, and the application process for domestic and international students.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "Admissions",
    "How to Apply",
    "Follow our straightforward application process to join CSF Australia's next intake.",
);

pub const STEPS: [Step; 6] = [
    Step::new(
        1,
        "Choose Your Course",
        "Browse our courses and select the qualification that aligns with your career goals.",
    ),
    Step::new(
        2,
        "Check Entry Requirements",
        "Review the entry requirements for your chosen course and ensure you meet the criteria.",
    ),
    Step::new(
        3,
        "Submit Application",
        "Complete the online application form and attach the required supporting documents.",
    ),
    Step::new(
        4,
        "Receive Offer Letter",
        "If your application is successful, you will receive an official offer letter from CSF.",
    ),
    Step::new(
        5,
        "Confirm Enrolment",
        "Accept your offer and pay the enrolment deposit to secure your place.",
    ),
    Step::new(
        6,
        "Orientation",
        "Attend orientation to meet your trainers and fellow students before your course begins.",
    ),
];

pub const DOMESTIC_REQUIREMENTS: [&str; 6] = [
    "Completion of Year 10 (Certificate III) or Year 12 (Certificate IV/Diploma)",
    "Australian Citizen, Permanent Resident, or New Zealand Citizen",
    "Language, Literacy and Numeracy (LLN) assessment",
    "Pre-enrolment interview with course advisor",
    "Working with Children Check (where required)",
    "Current First Aid certificate (or willingness to obtain)",
];

pub const INTERNATIONAL_REQUIREMENTS: [&str; 6] = [
    "Completion of Year 12 equivalent in home country",
    "English proficiency: IELTS 5.5+ or equivalent",
    "Valid student visa (subclass 500)",
    "Overseas Student Health Cover (OSHC)",
    "Certified copies of academic transcripts",
    "Pre-enrolment interview (English language assessment)",
];

pub const FEES: [RateRow; 5] = [
    RateRow::new(
        "Certificate III in Fitness (SIS30321)",
        "AUD $3,500",
        "AUD $7,000",
    ),
    RateRow::new(
        "Certificate IV in Fitness (SIS40221)",
        "AUD $5,500",
        "AUD $10,000",
    ),
    RateRow::new("Diploma of Sport (SIS50121)", "AUD $8,500", "AUD $14,000"),
    RateRow::new(
        "Cert IV in Sport Coaching (SIS40321)",
        "AUD $5,500",
        "AUD $10,000",
    ),
    RateRow::new(
        "Cert III in Sport & Recreation (SIS30121)",
        "AUD $3,500",
        "AUD $7,000",
    ),
];

pub const FEES_NOTE: &str = "* Fees are indicative and subject to change. Payment plans are available. Contact us for current fees and Government funding options.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStatus {
    EnrollingNow,
    Open,
    ComingSoon,
}

impl IntakeStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::EnrollingNow => "Enrolling Now",
            Self::Open => "Open",
            Self::ComingSoon => "Coming Soon",
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::EnrollingNow => "status-enrolling",
            Self::Open => "status-open",
            Self::ComingSoon => "status-soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intake {
    pub month: &'static str,
    pub status: IntakeStatus,
    pub availability: &'static str,
}

pub const INTAKES: [Intake; 4] = [
    Intake {
        month: "February",
        status: IntakeStatus::EnrollingNow,
        availability: "Limited spots available",
    },
    Intake {
        month: "May",
        status: IntakeStatus::Open,
        availability: "Spots available",
    },
    Intake {
        month: "July",
        status: IntakeStatus::Open,
        availability: "Spots available",
    },
    Intake {
        month: "October",
        status: IntakeStatus::ComingSoon,
        availability: "Applications open March",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scholarship {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const SCHOLARSHIPS: [Scholarship; 3] = [
    Scholarship {
        name: "CSF Excellence Scholarship",
        value: "Up to $1,000 off tuition",
        description: "For high-achieving students demonstrating academic excellence and community involvement.",
    },
    Scholarship {
        name: "Skills First Funding",
        value: "Subsidised fees",
        description: "Victorian Government funding available for eligible domestic students.",
    },
    Scholarship {
        name: "Payment Plans",
        value: "Flexible payments",
        description: "Spread your tuition across the duration of your course.",
    },
];
