//! Owned events and a collecting handler.

use std::convert::Infallible;

use crate::handler::Handler;

/// An owned copy of one callback invocation.
///
/// Mirrors the [`Handler`] methods one-to-one. Useful when the event stream
/// itself is the output, and in tests comparing event sequences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// An object opened.
    StartObject,
    /// An object member key.
    Key(String),
    /// An object closed.
    EndObject,
    /// An array opened.
    StartArray,
    /// An array closed.
    EndArray,
    /// A string value.
    String(String),
    /// A numeric value.
    Number(f64),
    /// A boolean literal.
    Boolean(bool),
    /// A null literal.
    Null,
}

/// A [`Handler`] that appends every event to a vector.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
}

impl EventCollector {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The events collected so far.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Consumes the collector, returning the collected events.
    #[must_use]
    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

impl Handler for EventCollector {
    type Error = Infallible;

    fn start_object(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::StartObject);
        Ok(())
    }

    fn key(&mut self, key: &str) -> Result<(), Self::Error> {
        self.events.push(Event::Key(key.to_owned()));
        Ok(())
    }

    fn end_object(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::EndObject);
        Ok(())
    }

    fn start_array(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::StartArray);
        Ok(())
    }

    fn end_array(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::EndArray);
        Ok(())
    }

    fn string(&mut self, value: &str) -> Result<(), Self::Error> {
        self.events.push(Event::String(value.to_owned()));
        Ok(())
    }

    fn number(&mut self, value: f64) -> Result<(), Self::Error> {
        self.events.push(Event::Number(value));
        Ok(())
    }

    fn boolean(&mut self, value: bool) -> Result<(), Self::Error> {
        self.events.push(Event::Boolean(value));
        Ok(())
    }

    fn null(&mut self) -> Result<(), Self::Error> {
        self.events.push(Event::Null);
        Ok(())
    }
}
