use super::{Cta, HeroCopy, Highlight, RateRow, Step};

pub const TITLE: &str = "Education Agents & Partners";
pub const DESCRIPTION: &str = "Partner with CSF Australia as an education agent. Learn about our commission structure, partnership benefits, and how to refer international students.";

pub const HERO: HeroCopy = HeroCopy::inner(
    "Education Agent Partners",
    "Partner With CSF",
    "Join our global network of education agents and help international students access quality vocational education in Australia.",
);

pub const INTRO: [&str; 2] = [
    "CSF Australia is a nationally registered RTO (Registered Training Organisation) and CRICOS provider offering quality vocational qualifications in fitness, sport, and health. We work with a select network of trusted education agents worldwide to help international students achieve their educational goals in Australia.",
    "Our agent partners receive dedicated support, competitive commission structures, and access to marketing resources to help them succeed in student recruitment.",
];

/// The intro section previews only the leading benefits.
pub const INTRO_BENEFITS: usize = 4;

pub const BENEFITS: [Highlight; 6] = [
    Highlight::new(
        "Competitive Commission",
        "Earn competitive commissions on every successfully enrolled student you refer to CSF Australia.",
    ),
    Highlight::new(
        "Dedicated Agent Support",
        "Access a dedicated agent liaison team for fast turnaround on applications, CoE issuance, and enquiries.",
    ),
    Highlight::new(
        "Marketing Materials",
        "Receive branded brochures, course fact sheets, and digital assets to support your student recruitment.",
    ),
    Highlight::new(
        "Regular Training",
        "Participate in agent webinars and site visits to stay updated on courses, fees, and entry requirements.",
    ),
    Highlight::new(
        "Student Progress Updates",
        "Receive regular updates on your referred students' progress, attendance, and academic results.",
    ),
    Highlight::new(
        "Priority Processing",
        "Applications from registered agents receive priority assessment and faster offer letter issuance.",
    ),
];

pub const PROCESS: [Step; 5] = [
    Step::new(
        1,
        "Register as an Agent",
        "Complete our online agent registration form and provide your business credentials and references.",
    ),
    Step::new(
        2,
        "Sign the Agreement",
        "Review and sign the CSF Agent Agreement, which outlines commission rates and responsibilities.",
    ),
    Step::new(
        3,
        "Attend Agent Training",
        "Participate in a CSF agent orientation to learn about our courses, entry requirements, and processes.",
    ),
    Step::new(
        4,
        "Start Referring Students",
        "Begin referring prospective students using your unique agent code and our online application portal.",
    ),
    Step::new(
        5,
        "Earn Commissions",
        "Receive commission payments for successfully enrolled students in accordance with the agreement.",
    ),
];

pub const COMMISSIONS: [RateRow; 3] = [
    RateRow::new("Certificate III", "5%", "12%"),
    RateRow::new("Certificate IV", "5%", "12%"),
    RateRow::new("Diploma", "5%", "15%"),
];

pub const COMMISSION_NOTE: &str = "Commission rates are based on total tuition fees. Full details are outlined in the Agent Agreement.";

pub const AGENT_EMAIL: &str = "agents@csf.edu.au";

pub const EMAIL_CTA: Cta = Cta {
    label: "Email agents@csf.edu.au",
    href: "mailto:agents@csf.edu.au",
};
