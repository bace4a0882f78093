//! Title fixtures shared by the unit tests.

use chrono::NaiveDate;
use data_loader::parser::split_list;
use data_loader::{ContentType, Title, UNKNOWN};

pub(crate) struct TitleBuilder(Title);

impl TitleBuilder {
    fn new(kind: ContentType, duration: &str) -> Self {
        Self(Title {
            show_id: String::new(),
            kind,
            title: "Untitled".to_string(),
            director: vec![UNKNOWN.to_string()],
            cast: vec![UNKNOWN.to_string()],
            country: vec![UNKNOWN.to_string()],
            date_added: "2020-01-15".to_string(),
            added_on: NaiveDate::from_ymd_opt(2020, 1, 15),
            release_year: 2020,
            rating: "PG".to_string(),
            duration: duration.to_string(),
            listed_in: vec!["Dramas".to_string()],
            description: String::new(),
        })
    }

    pub(crate) fn movie() -> Self {
        Self::new(ContentType::Movie, "90 min")
    }

    pub(crate) fn show() -> Self {
        Self::new(ContentType::TvShow, "1 Season")
    }

    pub(crate) fn rating(mut self, rating: &str) -> Self {
        self.0.rating = rating.to_string();
        self
    }

    pub(crate) fn year(mut self, year: i32) -> Self {
        self.0.release_year = year;
        self
    }

    pub(crate) fn duration(mut self, duration: &str) -> Self {
        self.0.duration = duration.to_string();
        self
    }

    pub(crate) fn added(mut self, year: i32, month: u32, day: u32) -> Self {
        self.0.added_on = NaiveDate::from_ymd_opt(year, month, day);
        self.0.date_added = format!("{year:04}-{month:02}-{day:02}");
        self
    }

    pub(crate) fn unparsed_date(mut self) -> Self {
        self.0.added_on = None;
        self.0.date_added = "someday".to_string();
        self
    }

    pub(crate) fn genres(mut self, genres: &str) -> Self {
        self.0.listed_in = split_list(genres);
        self
    }

    pub(crate) fn directors(mut self, directors: &str) -> Self {
        self.0.director = split_list(directors);
        self
    }

    pub(crate) fn cast(mut self, cast: &str) -> Self {
        self.0.cast = split_list(cast);
        self
    }

    pub(crate) fn countries(mut self, countries: &str) -> Self {
        self.0.country = split_list(countries);
        self
    }

    pub(crate) fn build(self) -> Title {
        self.0
    }
}
