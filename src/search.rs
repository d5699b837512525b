//! Linear scan of contacts against one query.

use std::borrow::Borrow;

use crate::contact::Contact;
use crate::engine::factory::ExactOrFuzzyEngineFactory;
use crate::engine::normalized::NormalizedEngineFactory;
use crate::error::Error;
use crate::query::Query;
use crate::{MatchEngine, MatchEngineFactory, SearchOptions};

/// Matches contacts against the query of a [`SearchOptions`]
pub struct Searcher {
    engine: Box<dyn MatchEngine>,
}

impl Searcher {
    /// Validates the pattern and builds the engine the options ask for
    pub fn from_options(options: &SearchOptions) -> Result<Self, Error> {
        let query = Query::parse(&options.pattern, options.max_pattern_length)?;
        if query.is_wildcard() {
            debug!("empty pattern, every contact matches");
        }
        let factory = NormalizedEngineFactory::new(
            ExactOrFuzzyEngineFactory::builder()
                .mode(options.mode())
                .threshold(options.threshold)
                .build(),
        );
        Ok(Self::with_engine(factory.create_engine(&query)))
    }

    /// Uses a ready-made engine. It receives raw contact fields.
    pub fn with_engine(engine: Box<dyn MatchEngine>) -> Self {
        debug!("search engine: {engine}");
        Self { engine }
    }

    /// Whether the name or the phone number of `contact` matches
    pub fn is_match(&self, contact: &Contact) -> bool {
        contact.fields().iter().any(|field| self.engine.match_field(field))
    }

    /// Keeps the matching contacts, in input order
    pub fn search<'a, I, C>(&'a self, contacts: I) -> impl Iterator<Item = C> + 'a
    where
        I: IntoIterator<Item = C>,
        I::IntoIter: 'a,
        C: Borrow<Contact> + 'a,
    {
        contacts.into_iter().filter(move |contact| {
            let contact: &Contact = <C as Borrow<Contact>>::borrow(contact);
            let matched = self.is_match(contact);
            if matched {
                trace!("matched {contact}");
            }
            matched
        })
    }
}
