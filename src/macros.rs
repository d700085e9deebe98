/// Declare a [`RuleTable`](crate::RuleTable) literal.
///
/// ```
/// let table = locfix::rule_table!("demo", {
///     "TokenLímite" => "TokenLimit",
///     "全部服务" => "Todos los servicios",
/// });
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! rule_table {
    ($name:expr, { $($pat:expr => $rep:expr),* $(,)? }) => {
        $crate::RuleTable::new($name, vec![ $($crate::Rule::new($pat, $rep)),* ])
    };
}
