//! Marketing copy rendered by the landing page.
//!
//! Everything here is literal data that exists only for the render
//! pass: no identity, no persistence, no lifecycle. The arrays are
//! `static` so section components can hold `&'static` references to
//! individual entries.

/// Highest rating a testimonial can carry; rendered as that many stars.
pub const MAX_RATING: u8 = 5;

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: "🔍",
        title: "Find Study Rooms",
        description: "Browse and join curated study groups tailored to your subjects and learning pace.",
    },
    Feature {
        icon: "👥",
        title: "Peer Study Buddies",
        description: "Connect with classmates at your level and build lasting study partnerships.",
    },
    Feature {
        icon: "🏆",
        title: "XP & Streaks",
        description: "Earn rewards for consistent learning and track your academic progress.",
    },
    Feature {
        icon: "💬",
        title: "Chat & Collaboration",
        description: "Discuss topics in real-time with peers and share resources seamlessly.",
    },
];

pub static HOW_IT_WORKS: [Step; 3] = [
    Step {
        number: "01",
        title: "Sign Up",
        description: "Create your account with Google in seconds",
    },
    Step {
        number: "02",
        title: "Join a Room",
        description: "Find study groups that match your interests",
    },
    Step {
        number: "03",
        title: "Collaborate & Learn",
        description: "Study together and achieve your goals",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Aisha Rahman",
        role: "Computer Science, 2nd year",
        quote: "I failed discrete math once studying alone. One semester in a Kupintar room and I passed with a B+. The streaks kept me honest.",
        rating: 5,
    },
    Testimonial {
        name: "Daniel Wijaya",
        role: "Medical student",
        quote: "Finding people who revise anatomy at 6 AM used to be impossible. Now my study buddies are two clicks away.",
        rating: 5,
    },
    Testimonial {
        name: "Putri Maharani",
        role: "High school senior",
        quote: "The rooms are small enough that nobody can hide. That's exactly the pressure I needed before finals.",
        rating: 4,
    },
];

pub static FAQ: [FaqEntry; 5] = [
    FaqEntry {
        question: "Is Kupintar free?",
        answer: "Yes. Joining rooms, matching with study buddies, and tracking your progress are free. We may add optional paid extras later, but the core will stay free.",
    },
    FaqEntry {
        question: "How do I sign in?",
        answer: "With your Google account. We never see your password; Google handles the sign-in and sends you back to your dashboard.",
    },
    FaqEntry {
        question: "How are study buddies matched?",
        answer: "By the subjects you pick, your level, and when you actually study. You can always browse rooms yourself instead of waiting for a match.",
    },
    FaqEntry {
        question: "Can I create a private room?",
        answer: "Yes. Private rooms are invite-only, so you can keep a room to your classmates or friends.",
    },
    FaqEntry {
        question: "What happens to my streak if I miss a day?",
        answer: "It resets, but your XP stays. Streaks reward consistency; XP records everything you've already put in.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_have_copy() {
        for feature in &FEATURES {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }

    #[test]
    fn steps_are_sequential() {
        for (i, step) in HOW_IT_WORKS.iter().enumerate() {
            let number: usize = step.number.parse().expect("step number is numeric");
            assert_eq!(number, i + 1);
            assert!(!step.title.is_empty());
            assert!(!step.description.is_empty());
        }
    }

    #[test]
    fn ratings_are_in_range() {
        for testimonial in &TESTIMONIALS {
            assert!(testimonial.rating >= 1);
            assert!(testimonial.rating <= MAX_RATING);
        }
    }

    #[test]
    fn testimonials_have_attribution() {
        for testimonial in &TESTIMONIALS {
            assert!(!testimonial.name.is_empty());
            assert!(!testimonial.role.is_empty());
            assert!(!testimonial.quote.is_empty());
        }
    }

    #[test]
    fn faq_entries_are_complete() {
        for entry in &FAQ {
            assert!(!entry.question.is_empty());
            assert!(!entry.answer.is_empty());
        }
    }
}
