use anyhow::{format_err, Error};
use log::debug;
use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use stack_string::{format_sstr, StackString};
use std::fmt;

use crate::{config::Config, utils::option_string_wrapper};

#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
pub struct OmdbMovie {
    #[serde(rename = "Title", default)]
    pub title: StackString,
    #[serde(rename = "Year", default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    #[serde(rename = "Rated")]
    pub rated: Option<StackString>,
    #[serde(rename = "Genre")]
    pub genre: Option<StackString>,
    #[serde(rename = "Plot")]
    pub plot: Option<StackString>,
    #[serde(rename = "Poster")]
    pub poster: Option<StackString>,
    #[serde(rename = "Response", default)]
    pub response: StackString,
    #[serde(rename = "Error")]
    pub error: Option<StackString>,
}

/// Years arrive as strings, sometimes as a range like `1999–2007`, keep the
/// leading digits only.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let year: Option<StackString> = Option::deserialize(deserializer)?;
    Ok(year.as_ref().and_then(|y| {
        let digits = y.split(|c: char| !c.is_ascii_digit()).next()?;
        digits.parse().ok()
    }))
}

impl fmt::Display for OmdbMovie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.title,
            self.year.unwrap_or(-1),
            option_string_wrapper(self.rated.as_ref()),
            option_string_wrapper(self.genre.as_ref()),
            option_string_wrapper(self.plot.as_ref()),
            option_string_wrapper(self.poster.as_ref()),
        )
    }
}

pub struct OmdbConnection {
    config: Config,
    client: Client,
}

impl Default for OmdbConnection {
    fn default() -> Self {
        let config = Config::with_config().expect("Failed to create config");
        Self::new(config)
    }
}

impl OmdbConnection {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Build the query url by plain interpolation, the title goes in without
    /// percent-encoding.
    #[must_use]
    pub fn search_url(&self, title: &str) -> StackString {
        let endpoint = &self.config.omdb_endpoint;
        let apikey = &self.config.movie_api_key;
        format_sstr!("{endpoint}?apikey={apikey}&t={title}")
    }

    /// # Errors
    /// Returns error if the request fails or the body is not json
    pub async fn search_title(&self, title: &str) -> Result<Value, Error> {
        let url: Url = self.search_url(title).parse()?;
        debug!("{:?}", url);
        self.client
            .get(url)
            .send()
            .await?
            .json()
            .await
            .map_err(Into::into)
    }

    /// # Errors
    /// Returns error if the request fails, the body is not json, or the api
    /// reports a failed lookup
    pub async fn find_movie(&self, title: &str) -> Result<OmdbMovie, Error> {
        let url: Url = self.search_url(title).parse()?;
        debug!("{:?}", url);
        let movie: OmdbMovie = self.client.get(url).send().await?.json().await?;
        Self::check_response(movie)
    }

    fn check_response(movie: OmdbMovie) -> Result<OmdbMovie, Error> {
        if movie.response.as_str() == "False" {
            let err = option_string_wrapper(movie.error.as_ref());
            return Err(format_err!("Failed to fetch movie from OMDb: {err}"));
        }
        Ok(movie)
    }
}
