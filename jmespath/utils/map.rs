/// A type that represents an abstraction over an associative array.
///
/// This maps to [`::indexmap::IndexMap<K, V>`] which preserves the
/// insertion order of keys. JMESPath objects are ordered: `keys()`,
/// `values()`, hash wildcard projections and multi-select hashes all
/// observe insertion order.
pub type Map<K, V> = ::indexmap::IndexMap<K, V>;

/// Creates a [`Map`] from a list of key-value pairs.
/// This macro is taken from the [maplit](https://github.com/bluss/maplit/blob/master/src/lib.rs)
/// crate to minimize external dependencies.
///
/// ## Example
///
/// ```
/// use jmespath_core as jmespath;
/// use jmespath::map;
/// use jmespath::Map;
///
/// let map = map!{
///     "a" => 1,
///     "b" => 2,
/// };
/// assert_eq!(map["a"], 1);
/// assert_eq!(map["b"], 2);
/// assert_eq!(map.get("c"), None);
/// ```
#[macro_export]
macro_rules! map {
    // trailing comma case
    ($($key:expr => $value:expr,)+) => (map!($($key => $value),+));

    ( $($key:expr => $value:expr),* ) => {
        {
            let mut _map = Map::new();
            $( let _ = _map.insert($key, $value); )*
            _map
        }
    };
}
