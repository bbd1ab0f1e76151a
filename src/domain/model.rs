use serde::{Deserialize, Serialize};
use std::fmt;

/// 金額，以「分」(百分之一貨幣單位) 儲存，避免浮點誤差
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    /// 兩位小數並以 `,` 分隔千位，例如 `1,234.50`
    pub fn to_grouped_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / 100).to_string();

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        format!("{}{}.{:02}", sign, grouped, abs % 100)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub key: i64,
    pub name: &'static str,
    pub name_es: &'static str,
    pub price_per_minute: Amount,
}

/// 通話費率表 (固定、唯讀)
pub const ZONES: [Zone; 7] = [
    Zone {
        key: 12,
        name: "North America",
        name_es: "América del Norte",
        price_per_minute: Amount::from_cents(200),
    },
    Zone {
        key: 15,
        name: "Central America",
        name_es: "América Central",
        price_per_minute: Amount::from_cents(220),
    },
    Zone {
        key: 18,
        name: "South America",
        name_es: "América del Sur",
        price_per_minute: Amount::from_cents(450),
    },
    Zone {
        key: 19,
        name: "Europe",
        name_es: "Europa",
        price_per_minute: Amount::from_cents(350),
    },
    Zone {
        key: 23,
        name: "Asia",
        name_es: "Asia",
        price_per_minute: Amount::from_cents(600),
    },
    Zone {
        key: 25,
        name: "Africa",
        name_es: "África",
        price_per_minute: Amount::from_cents(600),
    },
    Zone {
        key: 29,
        name: "Oceania",
        name_es: "Oceanía",
        price_per_minute: Amount::from_cents(500),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FizzBuzzLabel {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u32),
}

impl FizzBuzzLabel {
    pub fn for_index(i: u32) -> Self {
        if i % 15 == 0 {
            FizzBuzzLabel::FizzBuzz
        } else if i % 3 == 0 {
            FizzBuzzLabel::Fizz
        } else if i % 5 == 0 {
            FizzBuzzLabel::Buzz
        } else {
            FizzBuzzLabel::Number(i)
        }
    }
}

impl fmt::Display for FizzBuzzLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzzLabel::Fizz => f.write_str("Fizz"),
            FizzBuzzLabel::Buzz => f.write_str("Buzz"),
            FizzBuzzLabel::FizzBuzz => f.write_str("FizzBuzz"),
            FizzBuzzLabel::Number(i) => write!(f, "{}", i),
        }
    }
}
