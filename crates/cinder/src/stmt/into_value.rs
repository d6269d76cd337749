use super::*;

use uuid::Uuid;

/// Converts a Rust value into the value of a column holding `T`.
///
/// Generated `with_*`, `find_by_*` and `find_all_by_*` methods accept any
/// `impl IntoValue<T>` for a field of type `T`, so borrowed and owned values
/// both work and mismatched types fail to compile.
pub trait IntoValue<T: ?Sized> {
    fn into_value(self) -> Value;

    fn by_ref(&self) -> Value;
}

macro_rules! impl_into_value_for_owned {
    ( $( $t:ty ;)* ) => {
        $(
            impl IntoValue<$t> for $t {
                fn into_value(self) -> Value {
                    Value::from(self)
                }

                fn by_ref(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

impl_into_value_for_owned! {
    bool;
    i32;
    i64;
    String;
    Uuid;
    Vec<u8>;
}

impl<T: IntoValue<T> + ?Sized> IntoValue<T> for &T {
    fn into_value(self) -> Value {
        IntoValue::<T>::by_ref(self)
    }

    fn by_ref(&self) -> Value {
        IntoValue::<T>::by_ref(*self)
    }
}

impl<T: IntoValue<T>> IntoValue<Self> for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(value) => IntoValue::<T>::into_value(value),
            None => Value::Null,
        }
    }

    fn by_ref(&self) -> Value {
        match self {
            Some(value) => IntoValue::<T>::by_ref(value),
            None => Value::Null,
        }
    }
}

impl<T: IntoValue<T>> IntoValue<Option<T>> for T {
    fn into_value(self) -> Value {
        IntoValue::<T>::into_value(self)
    }

    fn by_ref(&self) -> Value {
        IntoValue::<T>::by_ref(self)
    }
}

impl<T: IntoValue<T>> IntoValue<Option<T>> for &T {
    fn into_value(self) -> Value {
        IntoValue::<T>::by_ref(self)
    }

    fn by_ref(&self) -> Value {
        IntoValue::<T>::by_ref(*self)
    }
}

impl IntoValue<String> for &str {
    fn into_value(self) -> Value {
        Value::from(self)
    }

    fn by_ref(&self) -> Value {
        Value::from(*self)
    }
}

impl IntoValue<Option<String>> for &str {
    fn into_value(self) -> Value {
        Value::from(self)
    }

    fn by_ref(&self) -> Value {
        Value::from(*self)
    }
}

#[test]
fn assert_bounds() {
    fn assert_into_value<T: ?Sized, E: IntoValue<T>>() {}

    assert_into_value::<i64, i64>();
    assert_into_value::<i64, &i64>();
    assert_into_value::<String, &str>();
    assert_into_value::<String, &String>();
    assert_into_value::<Option<String>, &str>();
    assert_into_value::<Option<String>, Option<String>>();
    assert_into_value::<Option<Uuid>, Uuid>();
}

#[test]
fn converts_to_column_values() {
    fn convert<T, E: IntoValue<T>>(value: E) -> Value {
        value.into_value()
    }

    assert_eq!(convert::<String, _>("A"), Value::from("A"));
    assert_eq!(convert::<i64, _>(&5_i64), Value::I64(5));
    assert_eq!(convert::<Option<String>, _>(None::<String>), Value::Null);
    assert_eq!(convert::<Option<i32>, _>(3_i32), Value::I32(3));
}
