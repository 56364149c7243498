use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingHours {
    pub weekday: Vec<String>,
    pub saturday: Vec<String>,
}

impl WorkingHours {
    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        let hours: WorkingHours = serde_json::from_str(s)?;
        for slot in hours.weekday.iter().chain(hours.saturday.iter()) {
            parse_time(slot)?;
        }
        Ok(hours)
    }

    /// Saturday gets its own reduced list; every other day, Sunday
    /// included, uses the weekday slots.
    pub fn slots_for(&self, date: NaiveDate) -> &[String] {
        if date.weekday() == Weekday::Sat {
            &self.saturday
        } else {
            &self.weekday
        }
    }

    pub fn has_slot(&self, date: NaiveDate, time: &str) -> bool {
        self.slots_for(date).iter().any(|s| s == time)
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        let to_vec = |slots: &[&str]| slots.iter().map(|s| s.to_string()).collect();
        Self {
            weekday: to_vec(&[
                "08:00", "09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00", "17:00",
            ]),
            saturday: to_vec(&["08:00", "09:00", "10:00", "11:00"]),
        }
    }
}

fn parse_time(s: &str) -> anyhow::Result<()> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err(anyhow::anyhow!("invalid time format: {s}"));
    }
    let hour: u32 = parts[0]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid hour in: {s}"))?;
    let minute: u32 = parts[1]
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid minute in: {s}"))?;
    if hour > 23 || minute > 59 {
        return Err(anyhow::anyhow!("time out of range: {s}"));
    }
    Ok(())
}
