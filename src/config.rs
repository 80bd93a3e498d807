use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

pub const EVENT_NAME: &str = "bitcoinhackathon.com";
pub const EVENT_TAGLINE: &str = "Join the ultimate Bitcoin development challenge";

// Zone-less on purpose: the countdown targets midnight in the viewer's
// local time.
pub const EVENT_START: &str = "2024-03-15T00:00:00";

pub const REGISTRATION_URL: &str = "https://www.b1tcoin.ai/";
pub const REGISTRATION_LABEL: &str = "Register Now";

pub const FOOTER_TEXT: &str = "Powered by bitcoinhackathon.com";

pub struct InfoCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        icon: "fa-code",
        title: "Build Bitcoin Solutions",
        text: "Create innovative applications on the Bitcoin blockchain",
    },
    InfoCard {
        icon: "fa-users",
        title: "Join Developers Worldwide",
        text: "Collaborate with top blockchain developers",
    },
    InfoCard {
        icon: "fa-trophy",
        title: "Win Amazing Prizes",
        text: "$100k+ in prizes including Bitcoin grants",
    },
];

pub fn event_start() -> DateTime<Local> {
    let naive = NaiveDateTime::parse_from_str(EVENT_START, "%Y-%m-%dT%H:%M:%S")
        .expect("event start timestamp is well-formed");
    Local
        .from_local_datetime(&naive)
        .earliest()
        .expect("event start timestamp exists in local time")
}
