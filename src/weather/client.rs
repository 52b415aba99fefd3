use serde::Deserialize;
use std::time::Duration;

use super::{WeatherError, WeatherReport};

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Wire shape of the OpenWeather current-weather response, reduced to
/// the fields the dashboard displays. Everything is optional at the
/// wire level; extraction decides what is required.
#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse {
    main: Option<MainFields>,
    #[serde(default)]
    weather: Vec<ConditionFields>,
    wind: Option<WindFields>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MainFields {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionFields {
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WindFields {
    speed: Option<f64>,
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Pull the display fields out of a decoded response. Temperature and
/// icon are required; anything else missing degrades to a blank field.
pub(super) fn extract_report(response: ApiResponse) -> Result<WeatherReport, WeatherError> {
    let main = response.main.unwrap_or(MainFields {
        temp: None,
        feels_like: None,
        humidity: None,
    });
    let condition = response.weather.into_iter().next();

    let temp = main.temp;
    let icon = condition.as_ref().and_then(|c| c.icon.clone());
    let (Some(temp), Some(icon)) = (temp, icon) else {
        return Err(WeatherError::IncompleteData);
    };

    let description = condition
        .and_then(|c| c.description)
        .map(|d| capitalize(&d))
        .unwrap_or_else(|| "N/A".to_string());

    Ok(WeatherReport {
        temp,
        feels_like: main.feels_like,
        humidity: main.humidity,
        description,
        icon,
        wind_speed: response.wind.and_then(|w| w.speed),
        city_name: response.name.unwrap_or_else(|| "N/A".to_string()),
    })
}

/// One GET against the weather provider. No retry; every failure mode
/// maps to a displayable [`WeatherError`] value.
pub(super) async fn fetch_weather(
    client: &reqwest::Client,
    zip_code: &str,
    api_key: &str,
    timeout: Duration,
) -> Result<WeatherReport, WeatherError> {
    let response = client
        .get(BASE_URL)
        .query(&[
            ("zip", format!("{},us", zip_code.trim()).as_str()),
            ("appid", api_key),
            ("units", "imperial"),
        ])
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| WeatherError::Network(e.to_string()))?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(WeatherError::InvalidApiKey);
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(WeatherError::ZipNotFound(zip_code.trim().to_string()));
    }
    if !status.is_success() {
        return Err(WeatherError::Api(format!("HTTP error: {}", status)));
    }

    let decoded: ApiResponse = response
        .json()
        .await
        .map_err(|e| WeatherError::Api(format!("Error parsing weather data: {}", e)))?;

    extract_report(decoded)
}
