use super::domain::{
    CountryProfile, MicroLesson, ProfileLevel, QuizOption, QuizQuestion, SectorProfile,
};
use super::market::MarketRateTable;
use std::collections::BTreeMap;

/// Question whose low answers trigger the platform suggestion.
pub const PLATFORM_QUESTION_ID: &str = "q7_platforms";

pub(super) fn countries() -> Vec<CountryProfile> {
    vec![
        CountryProfile::new("ES", "Spain", "EUR", "€", 1134.0),
        CountryProfile::new("MX", "Mexico", "MXN", "$", 7468.0),
        CountryProfile::new("AR", "Argentina", "ARS", "$", 202800.0),
        CountryProfile::new("CO", "Colombia", "COP", "$", 1300000.0),
        // Federal minimum wage, approximate.
        CountryProfile::new("US", "United States", "USD", "$", 1256.0),
        CountryProfile::new("CL", "Chile", "CLP", "$", 460000.0),
        CountryProfile::new("PE", "Peru", "PEN", "S/", 1025.0),
    ]
}

pub(super) fn sectors() -> Vec<SectorProfile> {
    vec![
        SectorProfile::new("design", "Graphic Design & Multimedia"),
        SectorProfile::new("writing", "Writing & Content (Copywriting)"),
        SectorProfile::new("development", "Web & Software Development"),
        SectorProfile::new("ux-ui", "UX/UI & Digital Product"),
        SectorProfile::new("audiovisual", "Audiovisual Production"),
        SectorProfile::new("education", "Education, Training & Tutoring"),
        SectorProfile::new("consulting", "Business Consulting & Strategy"),
        SectorProfile::new("ai-data-devops", "AI, Data & DevOps"),
        SectorProfile::new("marketing", "Digital Marketing & SEO"),
        SectorProfile::new("admin", "Virtual Assistance & Admin Support"),
        SectorProfile::new("other", "Other / Generalist Freelancer"),
    ]
}

const SECTOR_ORDER: [&str; 11] = [
    "design",
    "writing",
    "development",
    "ux-ui",
    "audiovisual",
    "education",
    "consulting",
    "ai-data-devops",
    "marketing",
    "admin",
    "other",
];

pub(super) fn market_rates() -> MarketRateTable {
    let rows: [(&str, [f64; 11]); 7] = [
        (
            "ES",
            [35.0, 30.0, 50.0, 55.0, 40.0, 45.0, 45.0, 60.0, 40.0, 25.0, 28.0],
        ),
        (
            "MX",
            [
                200.0, 150.0, 300.0, 330.0, 250.0, 180.0, 350.0, 360.0, 250.0, 120.0, 150.0,
            ],
        ),
        (
            "AR",
            [
                3000.0, 2500.0, 5000.0, 5500.0, 4000.0, 2800.0, 6000.0, 6000.0, 4500.0, 2000.0,
                2500.0,
            ],
        ),
        (
            "CO",
            [
                30000.0, 25000.0, 50000.0, 55000.0, 40000.0, 28000.0, 60000.0, 60000.0, 45000.0,
                20000.0, 25000.0,
            ],
        ),
        (
            "US",
            [50.0, 45.0, 75.0, 85.0, 60.0, 40.0, 80.0, 90.0, 65.0, 30.0, 40.0],
        ),
        (
            "CL",
            [
                15000.0, 12000.0, 25000.0, 27500.0, 20000.0, 10000.0, 30000.0, 30000.0, 22000.0,
                8000.0, 10000.0,
            ],
        ),
        (
            "PE",
            [30.0, 25.0, 50.0, 55.0, 40.0, 20.0, 60.0, 60.0, 45.0, 18.0, 25.0],
        ),
    ];

    let mut table = MarketRateTable::new();
    for (country, rates) in rows {
        for (sector, rate) in SECTOR_ORDER.iter().zip(rates) {
            table.insert(country, sector, rate);
        }
    }
    table
}

fn option(text: &'static str, points: u32) -> QuizOption {
    QuizOption { text, points }
}

pub(super) fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1_experience",
            block_title: "Hands-on Experience",
            question_text: "How long have you worked as a freelancer or in your main specialty?",
            options: vec![
                option("Just starting, less than 1 year.", 5),
                option("Some experience, between 1 and 3 years.", 10),
                option("A good while, between 3 and 5 years.", 15),
                option("A veteran, more than 5 years!", 20),
            ],
        },
        QuizQuestion {
            id: "q2_portfolio",
            block_title: "Portfolio & Success Stories",
            question_text: "How would you describe the portfolio or work you can show clients?",
            options: vec![
                option("Still building it, not much to show yet.", 0),
                option("A few samples that need better presentation.", 5),
                option("A basic but functional portfolio with several projects.", 10),
                option("A solid, varied portfolio with some standout results.", 15),
                option("An impressive portfolio that clearly proves my value.", 20),
            ],
        },
        QuizQuestion {
            id: "q3_professionalism",
            block_title: "Professional Maturity & Processes",
            question_text: "How do you manage projects, agreements and billing with clients?",
            options: vec![
                option("Mostly informal, verbal or chat agreements.", 0),
                option("A basic process: quotes first, simple invoices later.", 5),
                option("Quote templates, a defined workflow and formal invoices.", 10),
                option("Contracts, project management tools and professional billing.", 15),
                option("Well-defined, efficient, often automated professional processes.", 20),
            ],
        },
        QuizQuestion {
            id: "q4_tools",
            block_title: "Tools & Certifications",
            question_text: "How comfortable are you with your profession's key tools and certifications?",
            options: vec![
                option("Learning the basic tools.", 0),
                option("Comfortable with the standard tools of my work.", 5),
                option("Proficient with advanced tools and/or hold a relevant certification.", 10),
                option("Expert across tools and/or hold recognised certifications in my field.", 15),
            ],
        },
        QuizQuestion {
            id: "q5_reputation",
            block_title: "Reputation & External Validation",
            question_text: "Do you have testimonials, reviews or references from satisfied clients?",
            options: vec![
                option("Not many yet, or only informal ones.", 0),
                option("Good verbal feedback from some clients.", 3),
                option("Some written testimonials or positive online reviews.", 7),
                option("Excellent reviews and repeat clients who actively recommend me.", 10),
            ],
        },
        QuizQuestion {
            id: "q6_value_proposition",
            block_title: "Unique Value Proposition",
            question_text: "What makes you stand out in your professional field?",
            options: vec![
                option("Still working out what sets me apart.", 0),
                option("Reliable, good-quality service in line with the market.", 5),
                option("A clear specialisation, niche or distinctive approach.", 10),
                option("A clear, innovative proposition that solves specific client problems exceptionally.", 15),
            ],
        },
        QuizQuestion {
            id: PLATFORM_QUESTION_ID,
            block_title: "Your Digital Environment",
            question_text: "How familiar are you with the online platforms of your sector?",
            options: vec![
                option("I don't know any specific to my field.", 0),
                option("I've heard of some but barely used them.", 1),
                option("I've used platforms like these occasionally.", 2),
                option("I actively work or promote myself on one or more of them.", 3),
            ],
        },
    ]
}

pub(super) fn profile_levels() -> Vec<ProfileLevel> {
    vec![
        ProfileLevel {
            name: "Early Explorer",
            min_score: 0,
            max_score: 39,
            mentor_message: "You're starting out: focus on portfolio, processes and visibility.",
            mentor_tip: "Build your portfolio (even with small projects), define basic work processes and start showing up on your sector's platforms or LinkedIn.",
            recommendations: vec![
                "Focus on gaining experience with small projects to build your portfolio.",
                "Ask your first clients for testimonials.",
                "Define basic work and communication processes. Organisation is key.",
                "Keep learning and improving your skills.",
            ],
        },
        ProfileLevel {
            name: "Brand Builder",
            min_score: 40,
            max_score: 69,
            mentor_message: "You're on track: improve your positioning and value proposition.",
            mentor_tip: "Polish your portfolio, sharpen what makes you different and find ways to position yourself in front of your ideal client.",
            recommendations: vec![
                "Professionalise your portfolio. Show your best work and results.",
                "Set up more formal billing (invoices, simple contracts).",
                "Identify your strengths and consider specialising.",
                "Actively seek feedback and testimonials.",
            ],
        },
        ProfileLevel {
            name: "Established Professional",
            min_score: 70,
            max_score: 89,
            mentor_message: "Solid profile. Keep your standards and defend your rate.",
            mentor_tip: "Make your value proposition crystal clear and communicate it firmly. Defend the value of your time and experience when negotiating.",
            recommendations: vec![
                "Refine your value proposition. What makes you truly unique?",
                "Consider raising your rates gradually.",
                "Streamline your work processes to be more efficient.",
                "Strengthen your professional network.",
            ],
        },
        ProfileLevel {
            name: "Expert Reference",
            min_score: 90,
            max_score: 100,
            mentor_message: "Senior level. You can work with premium clients.",
            mentor_tip: "Consider packaging high-value services, strategic consulting or mentoring. Your personal brand should reflect this level and target clients who value expertise.",
            recommendations: vec![
                "Position yourself as an expert in your niche.",
                "Aim for larger projects and premium clients.",
                "Delegate non-essential tasks.",
                "Keep innovating and learning.",
                "Average rates vary by market. If your profile is strong but your rate is not, research high-demand niches or markets with higher potential.",
            ],
        },
    ]
}

pub(super) fn platform_examples() -> BTreeMap<&'static str, Vec<&'static str>> {
    BTreeMap::from([
        (
            "design",
            vec!["Behance", "Dribbble", "Adobe Portfolio", "Domestika"],
        ),
        (
            "writing",
            vec!["Medium", "Contently", "LinkedIn", "Substack"],
        ),
        (
            "development",
            vec!["GitHub", "GitLab", "Stack Overflow", "Upwork", "Dev.to"],
        ),
        (
            "ux-ui",
            vec![
                "Dribbble",
                "Behance",
                "Figma Community",
                "UserTesting.com",
                "LinkedIn",
            ],
        ),
        (
            "audiovisual",
            vec!["Vimeo", "YouTube", "ArtStation", "SoundCloud", "Epidemic Sound"],
        ),
        (
            "education",
            vec![
                "Udemy",
                "Coursera",
                "Teachable",
                "LinkedIn Learning",
                "Domestika",
            ],
        ),
        (
            "consulting",
            vec!["LinkedIn", "Upwork", "Malt", "Clarity.fm"],
        ),
        (
            "ai-data-devops",
            vec![
                "GitHub",
                "Kaggle",
                "AWS Marketplace",
                "Hugging Face",
                "Docker Hub",
                "LinkedIn",
            ],
        ),
        (
            "marketing",
            vec![
                "LinkedIn",
                "Upwork",
                "Fiverr",
                "Google My Business",
                "HubSpot Community",
            ],
        ),
        (
            "admin",
            vec!["Upwork", "Fiverr", "LinkedIn", "Asana", "Trello", "Clockify"],
        ),
        (
            "other",
            vec![
                "LinkedIn",
                "Upwork",
                "Fiverr",
                "Malt",
                "Workana",
                "Freelancer.com",
            ],
        ),
    ])
}

pub(super) fn client_tips() -> Vec<&'static str> {
    vec![
        "Paying fair rates on time builds a professional relationship and secures quality work.",
        "A clear, detailed brief is key: state your goals, audience, expected deliverables and deadlines.",
        "When hiring, weigh experience, portfolio, testimonials and communication, not just price.",
        "A good freelancer is an investment that can add real value to your project or business.",
    ]
}

pub(super) fn micro_lessons() -> Vec<MicroLesson> {
    vec![
        MicroLesson {
            id: "ml1",
            title: "What is a fair rate?",
            content: "A fair rate covers your costs, recognises your experience and skills, and lines up with what the market values for services like yours. It is not only about getting by, but about thriving and reinvesting in your growth.",
            link: None,
            link_text: None,
        },
        MicroLesson {
            id: "ml2",
            title: "Keys to negotiating with a client",
            content: "1. Know your value and be confident. 2. Listen actively to the client's needs. 3. Present your quote as an investment, not a cost. 4. Be clear about your limits and what you are willing to concede. 5. Always put agreements in writing.",
            link: Some("https://www.arturcreativelab.com/blog/negociar-presupuesto"),
            link_text: Some("Read more about negotiation"),
        },
        MicroLesson {
            id: "ml3",
            title: "Essentials of a freelance quote",
            content: "Include your details and the client's, a detailed description of the service, a breakdown of phases or deliverables, the hourly or project price, the total, payment terms, how long the offer is valid, and what is and is not included (for example revisions).",
            link: None,
            link_text: None,
        },
    ]
}
