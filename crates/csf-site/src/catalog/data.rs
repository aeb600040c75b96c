use super::{Course, CourseCategory, CourseDetail, FeeLine, Unit, UnitKind};

pub(super) const COURSES: [Course; 5] = [
    Course {
        id: "1",
        slug: "certificate-iii-fitness",
        name: "Certificate III in Fitness",
        code: "SIS30321",
        duration: "6 months",
        category: CourseCategory::Fitness,
        description: "Gain the foundational skills to work as a fitness instructor. Learn to instruct gym-based exercise, conduct fitness appraisals, and develop personalised fitness programs.",
        level: Some("Certificate III"),
    },
    Course {
        id: "2",
        slug: "certificate-iv-fitness",
        name: "Certificate IV in Fitness",
        code: "SIS40221",
        duration: "12 months",
        category: CourseCategory::Fitness,
        description: "Advance your fitness career with personal training competencies. Design and deliver fitness programs, provide nutrition coaching, and manage a personal training business.",
        level: Some("Certificate IV"),
    },
    Course {
        id: "3",
        slug: "diploma-of-sport",
        name: "Diploma of Sport",
        code: "SIS50121",
        duration: "18 months",
        category: CourseCategory::Sport,
        description: "A comprehensive qualification covering sport management, coaching, and administration. Ideal for those pursuing leadership roles in the sport industry.",
        level: Some("Diploma"),
    },
    Course {
        id: "4",
        slug: "certificate-iv-sport-coaching",
        name: "Certificate IV in Sport Coaching",
        code: "SIS40321",
        duration: "12 months",
        category: CourseCategory::Coaching,
        description: "Develop advanced coaching skills to plan and deliver sport programs. Covers athlete development, performance analysis, and coaching methodologies.",
        level: Some("Certificate IV"),
    },
    Course {
        id: "5",
        slug: "certificate-iii-sport-recreation",
        name: "Certificate III in Sport and Recreation",
        code: "SIS30121",
        duration: "6 months",
        category: CourseCategory::Recreation,
        description: "Build skills in sport and recreation coordination. Learn to organise events, supervise activities, and support participants in community sport and recreation settings.",
        level: Some("Certificate III"),
    },
];

const fn core(code: &'static str, name: &'static str) -> Unit {
    Unit {
        code,
        name,
        kind: UnitKind::Core,
    }
}

const fn elective(code: &'static str, name: &'static str) -> Unit {
    Unit {
        code,
        name,
        kind: UnitKind::Elective,
    }
}

const fn fee(label: &'static str, amount: &'static str) -> FeeLine {
    FeeLine { label, amount }
}

const ENTRY_FEES: [FeeLine; 3] = [
    fee("Domestic (Full Fee)", "AUD $3,500"),
    fee("International", "AUD $7,000"),
    fee("Payment Plans", "Available"),
];

const ADVANCED_FEES: [FeeLine; 3] = [
    fee("Domestic (Full Fee)", "AUD $5,500"),
    fee("International", "AUD $10,000"),
    fee("Payment Plans", "Available"),
];

const DIPLOMA_FEES: [FeeLine; 3] = [
    fee("Domestic (Full Fee)", "AUD $8,500"),
    fee("International", "AUD $14,000"),
    fee("Payment Plans", "Available"),
];

const FACE_TO_FACE: &str = "Face-to-face with online theory components";
const BLENDED: &str = "Blended (face-to-face + online)";
const SYDNEY_CAMPUS: &str = "Sydney Campus";

pub(super) const COURSE_DETAILS: [CourseDetail; 5] = [
    CourseDetail {
        course: COURSES[0],
        overview: "The Certificate III in Fitness (SIS30321) is your entry point into the fitness industry. This qualification prepares you to work as a fitness instructor in a range of settings including gyms, fitness centres, and community facilities. You will develop hands-on skills through practical training and industry placements.",
        outcomes: &[
            "Instruct gym-based exercise to individuals and groups",
            "Conduct fitness appraisals and consultations",
            "Develop and deliver personalised fitness programs",
            "Apply injury prevention and first aid knowledge",
            "Operate fitness equipment safely and effectively",
        ],
        units: &[
            core("SISFFIT006", "Instruct gym-based exercise"),
            core("SISFFIT007", "Conduct fitness appraisals"),
            core(
                "SISFFIT010",
                "Instruct approved community group exercise sessions",
            ),
            core("HLTAID011", "Provide First Aid"),
            elective("SISXCAI010", "Facilitate groups"),
            elective("SISXEMR001", "Respond to emergency situations"),
        ],
        entry_requirements: &[
            "Completion of Year 10 or equivalent",
            "Minimum age of 16 years",
            "Basic fitness and physical capability",
            "Language, Literacy and Numeracy (LLN) assessment",
        ],
        career_outcomes: &[
            "Gym Instructor",
            "Fitness Instructor",
            "Group Exercise Instructor",
            "Recreation Officer",
            "Community Fitness Leader",
        ],
        fees: &ENTRY_FEES,
        delivery_mode: FACE_TO_FACE,
        location: SYDNEY_CAMPUS,
    },
    CourseDetail {
        course: COURSES[1],
        overview: "The Certificate IV in Fitness (SIS40221) qualifies you as a Personal Trainer. Building on foundational fitness knowledge, this qualification provides advanced skills in program design, client management, and business operation for personal trainers.",
        outcomes: &[
            "Design personalised fitness and nutrition programs",
            "Deliver one-on-one and small group personal training",
            "Conduct advanced fitness assessments",
            "Manage a personal training business",
            "Apply nutrition coaching principles",
        ],
        units: &[
            core("SISFFIT014", "Provide personal training programs"),
            core("SISFFIT015", "Conduct personal training consultations"),
            core(
                "SISFFIT019",
                "Instruct personal training clients in gym-based exercise",
            ),
            core(
                "BSBSMB401",
                "Establish legal and risk management requirements of small business",
            ),
            elective(
                "SISFFIT016",
                "Apply sport science principles to personal training",
            ),
            elective("SISFFIT020", "Instruct older client exercise programs"),
        ],
        entry_requirements: &[
            "Certificate III in Fitness (SIS30321) or equivalent",
            "Current First Aid certificate",
            "Minimum age of 17 years",
            "LLN assessment",
        ],
        career_outcomes: &[
            "Personal Trainer",
            "Strength & Conditioning Coach",
            "Corporate Wellness Consultant",
            "Online Fitness Coach",
            "Gym Manager",
        ],
        fees: &ADVANCED_FEES,
        delivery_mode: BLENDED,
        location: SYDNEY_CAMPUS,
    },
    CourseDetail {
        course: COURSES[2],
        overview: "The Diploma of Sport (SIS50121) is a comprehensive qualification for those seeking leadership and management roles in sport. Covering sport management, administration, event coordination, and policy development, this diploma prepares graduates for senior roles in sporting organisations.",
        outcomes: &[
            "Manage sport programs and facilities",
            "Develop and implement sport policies",
            "Coordinate major sporting events",
            "Lead and manage sport teams and staff",
            "Apply strategic planning in sport organisations",
        ],
        units: &[
            core("SISXMGT001", "Lead and manage organisational change"),
            core("BSBMGT517", "Manage operational plan"),
            core("SISSSCO006", "Develop sport pathways programs"),
            core("SISXEVT003", "Coordinate sport and recreation events"),
            elective("SISXMGT002", "Manage human resources"),
            elective("SISXFAC004", "Manage facility operations"),
        ],
        entry_requirements: &[
            "Certificate IV in Sport Coaching or equivalent",
            "Minimum 2 years industry experience (recommended)",
            "Completion of Year 12 or equivalent",
            "LLN assessment",
        ],
        career_outcomes: &[
            "Sport Manager",
            "Sport Administrator",
            "Events Coordinator",
            "Sport Development Officer",
            "Recreation Manager",
        ],
        fees: &DIPLOMA_FEES,
        delivery_mode: BLENDED,
        location: SYDNEY_CAMPUS,
    },
    CourseDetail {
        course: COURSES[3],
        overview: "The Certificate IV in Sport Coaching (SIS40321) develops advanced coaching skills for community and competitive sport. This qualification covers coaching methodology, athlete development, performance analysis, and sports science application.",
        outcomes: &[
            "Plan and deliver sport coaching programs",
            "Analyse and improve athlete performance",
            "Apply sports science principles to coaching",
            "Manage athlete wellbeing and injury prevention",
            "Lead and mentor junior coaches",
        ],
        units: &[
            core("SISSSCO007", "Plan and conduct coaching sessions"),
            core("SISSSCO008", "Implement competition strategies"),
            core("SISSSCO009", "Plan athlete development programs"),
            core("HLTAID011", "Provide First Aid"),
            elective("SISSSCO010", "Apply sport science to coaching"),
            elective("SISXCAI012", "Develop activity programs"),
        ],
        entry_requirements: &[
            "Certificate III in Sport and Recreation or equivalent",
            "Current sport-specific coaching accreditation (recommended)",
            "Minimum age of 17 years",
            "LLN assessment",
        ],
        career_outcomes: &[
            "Sport Coach",
            "Athletic Development Coach",
            "Junior Development Officer",
            "Sport Coordinator",
            "School Sport Coordinator",
        ],
        fees: &ADVANCED_FEES,
        delivery_mode: BLENDED,
        location: SYDNEY_CAMPUS,
    },
    CourseDetail {
        course: COURSES[4],
        overview: "The Certificate III in Sport and Recreation (SIS30121) provides foundational skills for working in community sport and recreation. You will learn to organise activities, coordinate events, supervise participants, and support people of all ages in achieving their physical activity goals.",
        outcomes: &[
            "Coordinate and deliver sport and recreation activities",
            "Supervise participants in safe environments",
            "Organise small-scale sporting events",
            "Apply customer service skills in recreation settings",
            "Support participants with special needs",
        ],
        units: &[
            core(
                "SISXCAI004",
                "Instruct and facilitate sport and recreation activities",
            ),
            core(
                "SISXPLD003",
                "Conduct non-instructional sport and recreation activities",
            ),
            core("SISXCCS001", "Provide quality customer service"),
            core("HLTAID011", "Provide First Aid"),
            elective("SISXEVT001", "Assist with sport and recreation events"),
            elective(
                "SISXCAI003",
                "Work effectively with young people in a sport and recreation context",
            ),
        ],
        entry_requirements: &[
            "Completion of Year 10 or equivalent",
            "Minimum age of 16 years",
            "Basic fitness and physical capability",
            "LLN assessment",
        ],
        career_outcomes: &[
            "Recreation Officer",
            "Sport & Recreation Assistant",
            "Community Activity Coordinator",
            "School Sport Assistant",
            "Aquatic Centre Officer",
        ],
        fees: &ENTRY_FEES,
        delivery_mode: FACE_TO_FACE,
        location: SYDNEY_CAMPUS,
    },
];
