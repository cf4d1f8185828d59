/// Serialize a label enum as its `label()` string and parse it back through
/// `ALL`. RON cannot write unit variants whose names contain spaces.
macro_rules! label_strings {
    ($($ty:ident),+ $(,)?) => {$(
        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.label().to_string()
            }
        }

        impl TryFrom<String> for $ty {
            type Error = String;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.label() == value)
                    .ok_or_else(|| format!("unknown {} '{}'", stringify!($ty), value))
            }
        }
    )+};
}

pub mod civilian;
pub mod class_related;
pub mod common;
pub mod settlement;
