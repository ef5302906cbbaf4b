use super::{error_builder, Error, Kind, Position};

pub(crate) trait InvalidValueErrorBuilderFactory {
    type Builder: super::error_builder::InvalidValueErrorBuilder;
    fn get_invalid_value_error_builder() -> Self::Builder;
}
impl self::InvalidValueErrorBuilderFactory for Error {
    type Builder = self::InvalidValueErrorBuilder;

    fn get_invalid_value_error_builder() -> Self::Builder {
        Self::Builder::new()
    }
}

pub(crate) struct InvalidValueErrorBuilder {
    message: String,
    position: Option<Position>,
    reason: String,
}
impl InvalidValueErrorBuilder {
    pub fn new() -> Self {
        InvalidValueErrorBuilder {
            message: "".to_string(),
            position: None,
            reason: "".to_string(),
        }
    }
    fn format(&mut self) {
        self.message = self.reason.to_string();
    }
}
impl error_builder::ErrorBuilder for InvalidValueErrorBuilder {
    fn at(&mut self, position: super::Position) -> &mut Self {
        self.position = Some(position);
        self
    }
    fn build(&mut self) -> Error {
        self.format();
        return Error {
            kind: Kind::InvalidValue,
            message: std::mem::replace(&mut self.message, String::new()),
            position: self.position,
        };
    }
}
impl error_builder::InvalidValueErrorBuilder for InvalidValueErrorBuilder {
    fn for_reason(&mut self, reason: &str) -> &mut Self {
        self.reason = reason.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::error_builder::{ErrorBuilder, InvalidValueErrorBuilder as _};

    use super::*;

    #[test]
    fn invalid_value() {
        let err = Error::get_invalid_value_error_builder()
            .at(Position::new(1, 4))
            .for_reason("slice step cannot be 0")
            .build();

        assert_eq!(
            "Error(1, 4): invalid-value, slice step cannot be 0",
            format!("{}", err)
        );
    }
}
