/// Build a [`Map`](crate::value::Map) from `key => value` pairs.
/// Values go through `Into<Value>`, so primitives and nested
/// `map!`/`list!` results work directly.
#[macro_export]
macro_rules! map {
    () => {
        $crate::value::Map::new()
    };
    ( $( $key:expr => $value:expr ),* $(,)? ) => {{
        let mut map = $crate::value::Map::new();
        $( map.insert($key, $value); )*
        map
    }};
}

/// Build a [`Value::List`](crate::value::Value) from values going
/// through `Into<Value>`.
#[macro_export]
macro_rules! list {
    ( $( $value:expr ),* $(,)? ) => {
        $crate::value::Value::List(vec![ $( $crate::value::Value::from($value) ),* ])
    };
}
