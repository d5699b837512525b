//! Reading contacts from a line-oriented source.
//!
//! A contact is two consecutive lines: the name, then the phone number.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Lines};

use crate::SearchOptions;
use crate::error::Error;

/// Default limit on an input line, in characters.
pub const MAX_LINE_LENGTH: usize = 101;

/// A name and phone number pair, lower-cased
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Contact name
    pub name: String,
    /// Phone number, kept as text
    pub phone: String,
}

impl Contact {
    /// Creates a contact, lower-casing both fields
    pub fn new(name: &str, phone: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            phone: phone.to_ascii_lowercase(),
        }
    }

    /// The fields a query is matched against
    pub fn fields(&self) -> [&str; 2] {
        [&self.name, &self.phone]
    }
}

impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.phone)
    }
}

//------------------------------------------------------------------------------
/// Options for configuring how contacts are read
#[derive(Debug, Clone)]
pub struct ContactReaderOption {
    max_line_length: usize,
}

impl Default for ContactReaderOption {
    fn default() -> Self {
        Self {
            max_line_length: MAX_LINE_LENGTH,
        }
    }
}

impl ContactReaderOption {
    /// Creates reader options from search options
    pub fn from_options(options: &SearchOptions) -> Self {
        Self {
            max_line_length: options.max_line_length,
        }
    }

    /// Sets the longest accepted line, in characters
    pub fn max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Finishes the builder
    pub fn build(self) -> Self {
        self
    }
}

/// Turns a line source into a stream of [`Contact`]s
#[derive(Debug, Default)]
pub struct ContactReader {
    option: ContactReaderOption,
}

impl ContactReader {
    /// Creates a reader with the given options
    pub fn new(option: ContactReaderOption) -> Self {
        Self { option }
    }

    /// Reads contacts lazily from `source`.
    ///
    /// The iterator yields an error for the first invalid line. Callers are
    /// expected to stop there.
    ///
    /// ```
    /// use t9search::contact::{Contact, ContactReader};
    ///
    /// let input = "Petr Dvorak\n603123456\n";
    /// let contacts: Vec<Contact> = ContactReader::default()
    ///     .of_bufread(input.as_bytes())
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(contacts, vec![Contact::new("petr dvorak", "603123456")]);
    /// ```
    pub fn of_bufread<R: BufRead>(&self, source: R) -> Contacts<R> {
        Contacts {
            lines: source.lines(),
            line_no: 0,
            max_line_length: self.option.max_line_length,
        }
    }
}

/// Iterator over the contacts of a source, see [`ContactReader::of_bufread`]
pub struct Contacts<R> {
    lines: Lines<R>,
    line_no: usize,
    max_line_length: usize,
}

impl<R: BufRead> Contacts<R> {
    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(err) => return Some(Err(err.into())),
        };
        self.line_no += 1;
        Some(clean_line(&line, self.line_no, self.max_line_length))
    }
}

impl<R: BufRead> Iterator for Contacts<R> {
    type Item = Result<Contact, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = match self.next_line()? {
            Ok(name) => name,
            Err(err) => return Some(Err(err)),
        };
        let name_line = self.line_no;

        let phone = match self.next_line() {
            Some(Ok(phone)) => phone,
            Some(Err(err)) => return Some(Err(err)),
            None => {
                return Some(Err(Error::MissingPhoneNumber {
                    line: name_line,
                    name,
                }));
            }
        };

        trace!("read contact {name:?} / {phone:?}");
        Some(Ok(Contact { name, phone }))
    }
}

/// Validates one raw line (terminator already removed) and lower-cases it.
fn clean_line(raw: &str, line: usize, max: usize) -> Result<String, Error> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);

    let len = raw.chars().count();
    if len > max {
        return Err(Error::LineTooLong { line, len, max });
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyLine { line });
    }

    Ok(trimmed.to_ascii_lowercase())
}
