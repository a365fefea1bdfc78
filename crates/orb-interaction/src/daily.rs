//! Daily numerology reading, cached per calendar date.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use orb_core::Result;
use orb_core::input::BirthProfile;
use orb_core::preferences::PreferenceRepository;

use crate::agent::PromptMessage;
use crate::fallback::ProviderChain;
use crate::prompts;

const DAILY_MAX_TOKENS: u32 = 400;

/// Shown when every provider fails; never cached, so a same-day retry can
/// still succeed.
pub const STARS_UNCLEAR: &str = "The stars are unclear today... Try again later.";

const LAST_DATE_KEY: &str = "last_date";
const DAILY_COUNT_KEY: &str = "daily_count";
const BIRTH_DATE_KEY: &str = "birth_date";
const BIRTH_TIME_KEY: &str = "birth_time";
const BIRTH_CITY_KEY: &str = "birth_city";

fn reading_key(date: NaiveDate) -> String {
    format!("daily_reading_{}", date.format("%Y-%m-%d"))
}

/// Produces at most one remote reading per calendar date, persisting it in
/// the preference store alongside the birth profile.
pub struct DailyReadingService<P: PreferenceRepository> {
    chain: ProviderChain,
    prefs: Arc<P>,
}

impl<P: PreferenceRepository> DailyReadingService<P> {
    pub fn new(chain: ProviderChain, prefs: Arc<P>) -> Self {
        Self { chain, prefs }
    }

    /// Returns today's reading, from cache when one exists.
    ///
    /// A cache miss runs the provider chain once. Success is cached under
    /// today's date; failure returns [`STARS_UNCLEAR`] without caching.
    ///
    /// # Errors
    ///
    /// Only preference-store failures propagate; provider failures are
    /// folded into the sentinel text.
    pub async fn reading_for(&self, profile: &BirthProfile, today: NaiveDate) -> Result<String> {
        let key = reading_key(today);
        if let Some(cached) = self.prefs.get(&key).await? {
            debug!(date = %today, "daily reading served from cache");
            return Ok(cached);
        }

        let prompt = prompts::daily_prompt(profile, today);
        let messages = [PromptMessage::user(prompt)];
        match self.chain.complete(&messages, DAILY_MAX_TOKENS).await {
            Some(reading) => {
                let reading = reading.trim().to_string();
                self.prefs.set(&key, &reading).await?;
                info!(date = %today, "daily reading computed and cached");
                Ok(reading)
            }
            None => {
                debug!(date = %today, "daily chain exhausted, returning the sentinel");
                Ok(STARS_UNCLEAR.to_string())
            }
        }
    }

    /// Resets the per-day counter when the stored last-seen date is not
    /// `today`, then records `today` as last seen.
    ///
    /// # Errors
    ///
    /// Propagates preference-store failures.
    pub async fn rollover(&self, today: NaiveDate) -> Result<()> {
        let today_text = today.format("%Y-%m-%d").to_string();
        let last = self.prefs.get(LAST_DATE_KEY).await?;
        if last.as_deref() != Some(today_text.as_str()) {
            self.prefs.set(DAILY_COUNT_KEY, "0").await?;
            self.prefs.set(LAST_DATE_KEY, &today_text).await?;
            info!(date = %today, "daily counters rolled over");
        }
        Ok(())
    }

    /// Persists every field of the birth profile.
    ///
    /// # Errors
    ///
    /// Propagates preference-store failures.
    pub async fn save_profile(&self, profile: &BirthProfile) -> Result<()> {
        self.prefs.set(BIRTH_DATE_KEY, &profile.date).await?;
        self.prefs.set(BIRTH_TIME_KEY, &profile.time).await?;
        self.prefs.set(BIRTH_CITY_KEY, &profile.city).await?;
        Ok(())
    }

    /// Loads the stored birth profile; missing fields come back blank.
    ///
    /// # Errors
    ///
    /// Propagates preference-store failures.
    pub async fn load_profile(&self) -> Result<BirthProfile> {
        let date = self.prefs.get(BIRTH_DATE_KEY).await?.unwrap_or_default();
        let time = self.prefs.get(BIRTH_TIME_KEY).await?.unwrap_or_default();
        let city = self.prefs.get(BIRTH_CITY_KEY).await?.unwrap_or_default();
        Ok(BirthProfile::new(date, time, city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedAgent;
    use orb_infrastructure::MemoryPreferenceRepository;

    fn profile() -> BirthProfile {
        BirthProfile::new("29.02.2024", "12:30", "Lisbon")
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[tokio::test]
    async fn same_day_second_call_is_served_from_cache() {
        let agent = ScriptedAgent::ok("a", "a bright day ahead");
        let prefs = Arc::new(MemoryPreferenceRepository::new());
        let service = DailyReadingService::new(ProviderChain::new(vec![agent.clone()]), prefs);

        let first = service.reading_for(&profile(), day(25)).await.unwrap();
        let second = service.reading_for(&profile(), day(25)).await.unwrap();

        assert_eq!(first, "a bright day ahead");
        assert_eq!(second, first);
        assert_eq!(agent.calls(), 1);
    }

    #[tokio::test]
    async fn a_new_date_recomputes() {
        let agent = ScriptedAgent::ok("a", "reading");
        let prefs = Arc::new(MemoryPreferenceRepository::new());
        let service = DailyReadingService::new(ProviderChain::new(vec![agent.clone()]), prefs);

        service.reading_for(&profile(), day(25)).await.unwrap();
        service.reading_for(&profile(), day(26)).await.unwrap();

        assert_eq!(agent.calls(), 2);
    }

    #[tokio::test]
    async fn failure_is_not_cached_so_a_retry_can_succeed() {
        let prefs = Arc::new(MemoryPreferenceRepository::new());

        let dead = ScriptedAgent::failing("a");
        let failing = DailyReadingService::new(ProviderChain::new(vec![dead]), prefs.clone());
        let first = failing.reading_for(&profile(), day(25)).await.unwrap();
        assert_eq!(first, STARS_UNCLEAR);

        let live = ScriptedAgent::ok("a", "clear skies");
        let healthy = DailyReadingService::new(ProviderChain::new(vec![live]), prefs);
        let second = healthy.reading_for(&profile(), day(25)).await.unwrap();
        assert_eq!(second, "clear skies");
    }

    #[tokio::test]
    async fn rollover_resets_the_counter_only_on_a_date_change() {
        let prefs = Arc::new(MemoryPreferenceRepository::new());
        let service = DailyReadingService::new(ProviderChain::default(), prefs.clone());

        service.rollover(day(25)).await.unwrap();
        prefs.set(DAILY_COUNT_KEY, "3").await.unwrap();

        service.rollover(day(25)).await.unwrap();
        assert_eq!(prefs.get(DAILY_COUNT_KEY).await.unwrap().as_deref(), Some("3"));

        service.rollover(day(26)).await.unwrap();
        assert_eq!(prefs.get(DAILY_COUNT_KEY).await.unwrap().as_deref(), Some("0"));
        assert_eq!(
            prefs.get(LAST_DATE_KEY).await.unwrap().as_deref(),
            Some("2026-08-26")
        );
    }

    #[tokio::test]
    async fn profile_round_trips_through_the_store() {
        let prefs = Arc::new(MemoryPreferenceRepository::new());
        let service = DailyReadingService::new(ProviderChain::default(), prefs);

        assert!(!service.load_profile().await.unwrap().is_complete());
        service.save_profile(&profile()).await.unwrap();
        assert_eq!(service.load_profile().await.unwrap(), profile());
    }
}
