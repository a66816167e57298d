use serde::Deserialize;

use crate::domain::entities::filter::Scalar;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub set: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CardDetail {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub price_foil: Option<f64>,
    pub price_other: Option<f64>,
    #[serde(alias = "card_img")]
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub subtype: Option<String>,
    pub kind: Option<String>,
    pub signet: Option<String>,
    pub home: Option<String>,
    pub set: Option<String>,
    pub set_code: Option<String>,
    pub card_id: Option<Scalar>,
    pub rarity: Option<String>,
    pub cost: Option<Scalar>,
    pub cost_text: Option<String>,
    pub attack: Option<Scalar>,
    pub defence: Option<Scalar>,
    pub resistance: Option<Scalar>,
    pub site: Option<Scalar>,
    pub flavor_text: Option<String>,
    #[serde(alias = "game_text")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarCard {
    pub id: String,
    #[serde(alias = "card_name")]
    pub name: String,
    #[serde(default, alias = "card_price")]
    pub price: Option<f64>,
    #[serde(default, alias = "card_img")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardPage {
    pub card: Option<CardDetail>,
    pub similar: Vec<SimilarCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Brown,
    Red,
    Purple,
    Grey,
}

impl Accent {
    pub fn color(self) -> &'static str {
        match self {
            Accent::Blue => "#2196f3",
            Accent::Brown => "#795548",
            Accent::Red => "#f44336",
            Accent::Purple => "#9c27b0",
            Accent::Grey => "#9e9e9e",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub title: &'static str,
    pub text: String,
    pub accent: Accent,
}

fn entry(title: &'static str, text: Option<String>, accent: Accent) -> Option<StatEntry> {
    text.filter(|text| !text.trim().is_empty())
        .map(|text| StatEntry {
            title,
            text,
            accent,
        })
}

fn scalar_text(value: &Option<Scalar>) -> Option<String> {
    value.as_ref().map(Scalar::to_string)
}

// A zero stat reads as "no stat" and gets no tile.
fn stat_text(value: &Option<Scalar>) -> Option<String> {
    match value {
        Some(Scalar::Int(0)) => None,
        Some(Scalar::Float(number)) if *number == 0.0 => None,
        other => scalar_text(other),
    }
}

impl CardDetail {
    pub fn title(&self) -> String {
        format!(
            "{} (#{}{}) {}",
            self.name,
            self.set_code.as_deref().unwrap_or_default(),
            scalar_text(&self.card_id).unwrap_or_default(),
            self.set.as_deref().unwrap_or_default()
        )
        .trim_end()
        .to_string()
    }

    pub fn property_entries(&self) -> Vec<StatEntry> {
        [
            entry("Type", self.card_type.clone(), Accent::Blue),
            entry("Subtype", self.subtype.clone(), Accent::Blue),
            entry("Kind", self.kind.clone(), Accent::Blue),
            entry("Signet", self.signet.clone(), Accent::Blue),
            entry("Home Site", self.home.clone(), Accent::Blue),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    pub fn stat_entries(&self) -> Vec<StatEntry> {
        [
            entry("Value", stat_text(&self.cost), Accent::Blue),
            entry("Cost", self.cost_text.clone(), Accent::Blue),
            entry("Attack", stat_text(&self.attack), Accent::Brown),
            entry("Health", stat_text(&self.defence), Accent::Red),
            entry("Resistance", stat_text(&self.resistance), Accent::Purple),
            entry("Site", stat_text(&self.site), Accent::Grey),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    // Always three tiles, even when the backend has no value.
    pub fn detail_entries(&self) -> Vec<StatEntry> {
        let always = |title, text: Option<String>| StatEntry {
            title,
            text: text.unwrap_or_default(),
            accent: Accent::Blue,
        };
        vec![
            always("Set", self.set_code.clone()),
            always("Card ID", scalar_text(&self.card_id)),
            always("Rarity", self.rarity.clone()),
        ]
    }

    pub fn prices(&self) -> [(&'static str, String); 3] {
        [
            ("Current price", format_usd(self.price)),
            ("Foil price", format_usd(self.price_foil)),
            ("Other price", format_usd(self.price_other)),
        ]
    }
}

pub fn format_usd(amount: Option<f64>) -> String {
    let amount = amount.filter(|value| value.is_finite()).unwrap_or(0.0);
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (idx, digit) in dollars.chars().enumerate() {
        if idx > 0 && (dollars.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
