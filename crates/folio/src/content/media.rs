use chrono::NaiveDate;
use url::Url;

use super::{Image, parse_url};
use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%d %B %Y";

struct MediaRecord {
    headline: &'static str,
    outlet: &'static str,
    date: &'static str,
    image_id: &'static str,
    link: &'static str,
}

const MEDIA: [MediaRecord; 3] = [
    MediaRecord {
        headline: "大埔惡火燒出港府「災難性回應」　專家點出為何香港連中國都不如",
        outlet: "SET News",
        date: "18 December 2025",
        image_id: "1dalDCALHRWfAURF5w4qVrakR1enrGpaQ",
        link: "https://www.setn.com/News.aspx?NewsID=1767639",
    },
    MediaRecord {
        headline: "國際抨擊港府陷管治真空　李家超入選「2025年度暴君」投票",
        outlet: "Pulse HK News",
        date: "15 December 2025",
        image_id: "14v5nC2F5R-sTdnI5z0Rf1J7pkY7qYcRU",
        link: "https://pulsehknews.com/tyrant-of-the-year/?fbclid=IwY2xjawO37tVleHRuA2FlbQIxMABzcnRjBmFwcF9pZBAyMjIwMzkxNzg4MjAwODkyAAEef922eOe8wZlQgGZdEKoqn3ET2DbmxpvC0oLCy3tgsu2QPo-m1ykKOYWacZQ_aem_Ib65Twr1hc6hgIaUmrRndg",
    },
    MediaRecord {
        headline: "香港角色由國際金融中心 轉向服務中國進動「全球南方」議程",
        outlet: "Photon Media",
        date: "7 August 2025",
        image_id: "1HM69Fnd1IrU1qiUJFTIOdm8XsmN-331o",
        link: "https://photonmedia.net/diplomat0807/",
    },
];

/// A press appearance: an article quoting or featuring the analyst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    headline: String,
    outlet: String,
    date: NaiveDate,
    image: Url,
    link: Url,
}

impl MediaItem {
    pub fn new(
        headline: impl Into<String>,
        outlet: impl Into<String>,
        date: NaiveDate,
        image: Url,
        link: Url,
    ) -> Self {
        Self {
            headline: headline.into(),
            outlet: outlet.into(),
            date,
            image,
            link,
        }
    }

    fn from_record(record: &MediaRecord) -> Result<Self> {
        let date = NaiveDate::parse_from_str(record.date, DATE_FORMAT).map_err(|source| {
            Error::Date {
                value: record.date.to_string(),
                source,
            }
        })?;
        Ok(Self::new(
            record.headline,
            record.outlet,
            date,
            super::thumbnail_url(record.image_id)?,
            parse_url(record.link)?,
        ))
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn outlet(&self) -> &str {
        &self.outlet
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The article link.
    pub fn link(&self) -> &Url {
        &self.link
    }

    /// The card image, described by the headline.
    pub fn image(&self) -> Image {
        Image {
            src: self.image.clone(),
            alt: self.headline.clone(),
        }
    }

    /// Date as shown on the card, e.g. `7 August 2025`.
    pub fn display_date(&self) -> String {
        self.date.format("%-d %B %Y").to_string()
    }

    /// `"{outlet}, {date}"`.
    pub fn byline(&self) -> String {
        format!("{}, {}", self.outlet, self.display_date())
    }
}

/// Media appearances, most recent first.
pub fn media_items() -> Result<Vec<MediaItem>> {
    MEDIA.iter().map(MediaItem::from_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_in_listed_order() {
        let items = media_items().unwrap();
        let outlets: Vec<_> = items.iter().map(MediaItem::outlet).collect();
        assert_eq!(outlets, ["SET News", "Pulse HK News", "Photon Media"]);
        assert!(items.windows(2).all(|pair| pair[0].date() >= pair[1].date()));
    }

    #[test]
    fn test_byline() {
        let items = media_items().unwrap();
        assert_eq!(items[0].byline(), "SET News, 18 December 2025");
        assert_eq!(items[2].byline(), "Photon Media, 7 August 2025");
    }

    #[test]
    fn test_links_survive_parsing() {
        let items = media_items().unwrap();
        assert_eq!(
            items[0].link().as_str(),
            "https://www.setn.com/News.aspx?NewsID=1767639"
        );
        assert_eq!(items[2].link().as_str(), "https://photonmedia.net/diplomat0807/");
        assert!(items[1].link().as_str().contains("fbclid="));
    }

    #[test]
    fn test_image_alt_is_headline() {
        let item = &media_items().unwrap()[1];
        let image = item.image();
        assert_eq!(image.alt, item.headline());
        assert!(image.src.as_str().ends_with("id=14v5nC2F5R-sTdnI5z0Rf1J7pkY7qYcRU&sz=w2000"));
    }
}
