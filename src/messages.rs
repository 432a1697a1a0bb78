use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc, Weekday};

/// Coarse part of the day, by local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => DayPeriod::Morning,
            12..=16 => DayPeriod::Afternoon,
            17..=20 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }
}

/// Reminder for a weekday and part of the day.
pub fn dynamic_message(weekday: Weekday, period: DayPeriod) -> &'static str {
    use DayPeriod::*;

    match (weekday, period) {
        (Weekday::Sun, Morning) => "Plenty of time to daven Shachris! Start your week right! 🌅",
        (Weekday::Sun, Afternoon) => "Good afternoon! Still time to daven before shkia 🙏",
        (Weekday::Sun, Evening) => "Getting closer! Make time for davening 🕐",
        (Weekday::Sun, Night) => "Late night! Daven Shachris soon ⏰",

        (Weekday::Mon, Morning) => "Start your Monday with davening! You have time 🌄",
        (Weekday::Mon, Afternoon) => "Afternoon reminder: Daven before shkia today 📿",
        (Weekday::Mon, Evening) => "Don't wait! Shkia is getting closer 🕒",
        (Weekday::Mon, Night) => "Late night! Time to daven Shachris ⏰",

        (Weekday::Tue, Morning) => "Beautiful Tuesday morning! Time for Shachris 🌞",
        (Weekday::Tue, Afternoon) => "Afternoon check-in: Remember to daven! 🙏",
        (Weekday::Tue, Evening) => "Time is short! Get to davening 🕐",
        (Weekday::Tue, Night) => "Late night! Daven Shachris soon ⏰",

        (Weekday::Wed, Morning) => "Midweek blessing! Plenty of time to daven 🌅",
        (Weekday::Wed, Afternoon) => "Afternoon davening reminder 📿",
        (Weekday::Wed, Evening) => "Getting late! Daven soon 🕒",
        (Weekday::Wed, Night) => "Late night! Time for Shachris ⏰",

        (Weekday::Thu, Morning) => "Thursday morning! Start with davening 🌄",
        (Weekday::Thu, Afternoon) => "Good time to daven Shachris 🙏",
        (Weekday::Thu, Evening) => "Time running out! Daven soon 🕐",
        (Weekday::Thu, Night) => "Late night! Daven Shachris soon ⏰",

        (Weekday::Fri, Morning) => "Erev Shabbos! Daven early, prepare for Shabbos 🕯️",
        (Weekday::Fri, Afternoon) => "Friday afternoon! Daven before Shabbos prep 📿",
        (Weekday::Fri, Evening) => "Erev Shabbos rush! Daven quickly! 🕒",
        (Weekday::Fri, Night) => "Late night! Late Erev Shabbos! Prepare for Shabbos 🕯️",

        (Weekday::Sat, Morning) => "Shabbos Shalom! Enjoy your day of rest 🕊️",
        (Weekday::Sat, Afternoon) => "Peaceful Shabbos afternoon 🌟",
        (Weekday::Sat, Evening) => "Shabbos winding down... 🌅",
        (Weekday::Sat, Night) => "Shabbos night... ✨",
    }
}

/// The reminder for `now` as experienced at the location.
pub fn message_at<T: TimeZone>(now: DateTime<Utc>, tz: &T) -> &'static str {
    let local = now.with_timezone(tz);
    dynamic_message(local.weekday(), DayPeriod::from_hour(local.hour()))
}
