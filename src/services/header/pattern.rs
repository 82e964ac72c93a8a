//! Compiles LDML-style date patterns ("YYYY년 MM월 W주차") into segments.

use chrono::{Datelike, NaiveDate};

use super::locale::Locale;
use super::HeaderError;
use crate::utils::date::{week_based_year, week_of_month, week_of_year};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `y` calendar year, or `Y` week-based year. Width 2 keeps the last two digits.
    Year { week_based: bool, width: usize },
    Month { width: usize },
    MonthName { long: bool },
    Day { width: usize },
    WeekOfMonth { width: usize },
    WeekOfYear { width: usize },
    Weekday { long: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledPattern {
    pub fn compile(pattern: &str) -> Result<Self, HeaderError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                    continue;
                }
                loop {
                    match chars.next() {
                        Some('\'') if chars.peek() == Some(&'\'') => {
                            chars.next();
                            literal.push('\'');
                        }
                        Some('\'') => break,
                        Some(quoted) => literal.push(quoted),
                        None => {
                            return Err(HeaderError::UnterminatedQuote(pattern.to_string()))
                        }
                    }
                }
            } else if c.is_ascii_alphabetic() {
                let mut width = 1;
                while chars.peek() == Some(&c) {
                    chars.next();
                    width += 1;
                }
                let field = field_for(c, width)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
            } else {
                literal.push(c);
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn render(&self, date: NaiveDate, locale: &Locale) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => render_field(&mut out, *field, date, locale),
            }
        }
        out
    }
}

fn field_for(letter: char, width: usize) -> Result<Field, HeaderError> {
    let field = match letter {
        'y' => Field::Year {
            week_based: false,
            width,
        },
        'Y' => Field::Year {
            week_based: true,
            width,
        },
        'M' if width >= 3 => Field::MonthName { long: width >= 4 },
        'M' => Field::Month { width },
        'd' => Field::Day { width },
        'W' => Field::WeekOfMonth { width },
        'w' => Field::WeekOfYear { width },
        'E' => Field::Weekday { long: width >= 4 },
        other => return Err(HeaderError::UnsupportedField(other)),
    };
    Ok(field)
}

fn render_field(out: &mut String, field: Field, date: NaiveDate, locale: &Locale) {
    let rules = &locale.week_rules;
    match field {
        Field::Year { week_based, width } => {
            let year = if week_based {
                week_based_year(date, rules)
            } else {
                date.year()
            };
            if width == 2 {
                out.push_str(&format!("{:02}", year.rem_euclid(100)));
            } else {
                push_padded(out, year as i64, width);
            }
        }
        Field::Month { width } => push_padded(out, date.month() as i64, width),
        Field::MonthName { long } => out.push_str(&locale.month_name(date, long)),
        Field::Day { width } => push_padded(out, date.day() as i64, width),
        Field::WeekOfMonth { width } => push_padded(out, week_of_month(date, rules) as i64, width),
        Field::WeekOfYear { width } => push_padded(out, week_of_year(date, rules) as i64, width),
        Field::Weekday { long } => out.push_str(locale.weekday_name(date.weekday(), long)),
    }
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{:0width$}", value, width = width));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compile_week_pattern() {
        let pattern = CompiledPattern::compile("YYYY년 MM월 W주차").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Field(Field::Year {
                    week_based: true,
                    width: 4
                }),
                Segment::Literal("년 ".to_string()),
                Segment::Field(Field::Month { width: 2 }),
                Segment::Literal("월 ".to_string()),
                Segment::Field(Field::WeekOfMonth { width: 1 }),
                Segment::Literal("주차".to_string()),
            ]
        );
    }

    #[test]
    fn test_render_korean() {
        let locale = Locale::KOREAN;
        let pattern = CompiledPattern::compile("yyyy.MM.dd (E)").unwrap();
        assert_eq!(pattern.render(date(2022, 11, 6), &locale), "2022.11.06 (일)");

        let pattern = CompiledPattern::compile("M월 d일 EEEE").unwrap();
        assert_eq!(pattern.render(date(2022, 3, 9), &locale), "3월 9일 수요일");
    }

    #[test]
    fn test_quoted_literals() {
        let pattern = CompiledPattern::compile("'Week' w 'of' yy, ''MMM''").unwrap();
        let locale = Locale::parse("en_US").unwrap();
        assert_eq!(pattern.render(date(2022, 11, 13), &locale), "Week 47 of 22, 'Nov'");
    }

    #[test]
    fn test_rejects_unsupported_letters() {
        assert_eq!(
            CompiledPattern::compile("yyyy HH:mm"),
            Err(HeaderError::UnsupportedField('H'))
        );
    }

    #[test]
    fn test_rejects_unterminated_quote() {
        assert!(matches!(
            CompiledPattern::compile("yyyy 'open"),
            Err(HeaderError::UnterminatedQuote(_))
        ));
    }
}
