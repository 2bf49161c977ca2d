//! The callback table driven by the parser.

use std::error::Error as StdError;

/// Receives structural and value events as the parser recognizes them.
///
/// Every method has a no-op default, so a handler implements only the events
/// it cares about; events without a handler are silently dropped, never
/// buffered. Handlers run synchronously on the parser's call stack and may
/// abort the parse by returning an error, which surfaces as
/// [`ErrorKind::Handler`](crate::ErrorKind::Handler) at the current offset.
///
/// Borrowed `&str` payloads point into the parser's scratch buffer and are
/// valid only for the duration of the callback; copy them to keep them.
pub trait Handler {
    /// Error type used by a handler to abort parsing early.
    ///
    /// Use [`std::convert::Infallible`] for handlers that never abort.
    type Error: StdError;

    /// An object opened (`{`).
    fn start_object(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// An object member key was decoded.
    fn key(&mut self, key: &str) -> Result<(), Self::Error> {
        let _ = key;
        Ok(())
    }

    /// An object closed (`}`).
    fn end_object(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// An array opened (`[`).
    fn start_array(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// An array closed (`]`).
    fn end_array(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// A string value was decoded.
    fn string(&mut self, value: &str) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    /// A numeric value was decoded.
    ///
    /// Conversion uses Rust's locale-independent `f64` parser: the radix
    /// point is always `.`. The token `-0` is reported as IEEE 754 negative
    /// zero, and values outside the `f64` range saturate to infinity.
    fn number(&mut self, value: f64) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    /// A `true` or `false` literal was recognized.
    fn boolean(&mut self, value: bool) -> Result<(), Self::Error> {
        let _ = value;
        Ok(())
    }

    /// A `null` literal was recognized.
    fn null(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for &mut H {
    type Error = H::Error;

    fn start_object(&mut self) -> Result<(), Self::Error> {
        (**self).start_object()
    }

    fn key(&mut self, key: &str) -> Result<(), Self::Error> {
        (**self).key(key)
    }

    fn end_object(&mut self) -> Result<(), Self::Error> {
        (**self).end_object()
    }

    fn start_array(&mut self) -> Result<(), Self::Error> {
        (**self).start_array()
    }

    fn end_array(&mut self) -> Result<(), Self::Error> {
        (**self).end_array()
    }

    fn string(&mut self, value: &str) -> Result<(), Self::Error> {
        (**self).string(value)
    }

    fn number(&mut self, value: f64) -> Result<(), Self::Error> {
        (**self).number(value)
    }

    fn boolean(&mut self, value: bool) -> Result<(), Self::Error> {
        (**self).boolean(value)
    }

    fn null(&mut self) -> Result<(), Self::Error> {
        (**self).null()
    }
}
