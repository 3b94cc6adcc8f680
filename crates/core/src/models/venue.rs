use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How a venue can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingMode {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "equipo")]
    Team,
    #[serde(rename = "ambos")]
    Both,
}

/// How the user intends to play. Narrower than [`BookingMode`]: a single booking is
/// always either solo or for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    #[serde(rename = "solo")]
    Solo,
    #[serde(rename = "equipo")]
    Team,
}

impl PlayMode {
    pub fn label(&self) -> &'static str {
        match self {
            PlayMode::Solo => "Solo",
            PlayMode::Team => "Equipo",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::Solo => "solo",
            PlayMode::Team => "equipo",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "solo" => Some(PlayMode::Solo),
            "equipo" => Some(PlayMode::Team),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    #[serde(rename = "tipoCancha")]
    pub label: String,
    #[serde(rename = "cantidad", default = "default_count", deserialize_with = "flexible_u32")]
    pub count: u32,
    /// Ordered slot labels such as `"10:00"`.
    #[serde(
        rename = "horariosDisponibles",
        default,
        deserialize_with = "time_slots",
        serialize_with = "joined_time_slots"
    )]
    pub time_slots: Vec<String>,
    #[serde(rename = "materialesCancha", default)]
    pub materials: String,
}

impl Court {
    /// Split a comma-delimited slot list, dropping blanks and repeats.
    pub fn parse_slots(raw: &str) -> Vec<String> {
        unique_slots(raw.split(','))
    }

    pub fn offers(&self, slot: &str) -> bool {
        self.time_slots.iter().any(|s| s == slot)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipoDeporte")]
    pub sport: String,
    #[serde(rename = "jugadoresMax", default, deserialize_with = "flexible_u32")]
    pub max_players: u32,
    #[serde(rename = "costo", default, deserialize_with = "flexible_u32")]
    pub hourly_cost: u32,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "materiales", default)]
    pub materials: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
    #[serde(rename = "estacionamiento", default)]
    pub parking: bool,
    #[serde(rename = "petos", default)]
    pub vests: bool,
    #[serde(rename = "arbitros", default)]
    pub referees: bool,
    #[serde(rename = "servicios", default)]
    pub services: Vec<String>,
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
    #[serde(rename = "canchas", default)]
    pub courts: Vec<Court>,
    #[serde(rename = "modo", default)]
    pub mode: Option<BookingMode>,
}

impl Venue {
    /// Whether the venue can be booked in the given mode. Venues without a declared
    /// mode take both.
    pub fn accepts(&self, mode: PlayMode) -> bool {
        match self.mode {
            None | Some(BookingMode::Both) => true,
            Some(BookingMode::Solo) => mode == PlayMode::Solo,
            Some(BookingMode::Team) => mode == PlayMode::Team,
        }
    }

    pub fn has_courts(&self) -> bool {
        !self.courts.is_empty()
    }
}

fn default_count() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

// The catalog stores some numbers as text ("25000", "$25.000"). Fractions are
// rounded, negatives clamp to zero and unreadable text counts as zero.
fn flexible_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(n) => n,
        RawNumber::Text(text) => parse_amount(&text).unwrap_or(0.0),
    };
    Ok(clamp_u32(value))
}

fn clamp_u32(value: f64) -> u32 {
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.round() as u32
    }
}

/// Parse a textual amount. `.` or `,` followed by exactly three digits is a
/// thousands separator; any other `,` is a decimal comma.
fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_prefix('$').unwrap_or(text).trim_start();
    let chars: Vec<char> = text.chars().collect();

    let mut normalized = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        match c {
            '.' | ',' if is_thousands_separator(&chars, i) => {}
            ',' => normalized.push('.'),
            _ => normalized.push(c),
        }
    }
    normalized.parse().ok()
}

fn is_thousands_separator(chars: &[char], at: usize) -> bool {
    let digit = |i: usize| chars.get(i).is_some_and(char::is_ascii_digit);
    at > 0
        && digit(at - 1)
        && (1..=3).all(|offset| digit(at + offset))
        && !digit(at + 4)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSlots {
    Delimited(String),
    List(Vec<String>),
}

fn time_slots<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawSlots::deserialize(deserializer)? {
        RawSlots::Delimited(raw) => Court::parse_slots(&raw),
        RawSlots::List(list) => unique_slots(list.iter().map(String::as_str)),
    })
}

// Trimmed, non-empty, first occurrence wins.
fn unique_slots<'a>(slots: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for slot in slots.map(str::trim) {
        if !slot.is_empty() && !unique.iter().any(|s| s == slot) {
            unique.push(slot.to_string());
        }
    }
    unique
}

fn joined_time_slots<S>(slots: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&slots.join(","))
}
