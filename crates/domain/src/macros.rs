/// Builds an AND node: `and![eq, gt, ...]`.
#[macro_export]
macro_rules! and {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<::std::sync::Arc<$crate::ast::expr::Expression>> =
                ::std::vec![$(::std::sync::Arc::new($crate::ast::expr::Expression::from($child))),*];
            $crate::build::builder::DomainBuilder::and_x(children)
        }
    };
}

#[macro_export]
macro_rules! or {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<::std::sync::Arc<$crate::ast::expr::Expression>> =
                ::std::vec![$(::std::sync::Arc::new($crate::ast::expr::Expression::from($child))),*];
            $crate::build::builder::DomainBuilder::or_x(children)
        }
    };
}

#[macro_export]
macro_rules! not {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<::std::sync::Arc<$crate::ast::expr::Expression>> =
                ::std::vec![$(::std::sync::Arc::new($crate::ast::expr::Expression::from($child))),*];
            $crate::build::builder::DomainBuilder::not_x(children)
        }
    };
}

/// Builds a comparison from a raw operator symbol: `cmp!("age", ">=", 18)`.
/// Evaluates to a `Result` since the symbol is checked.
#[macro_export]
macro_rules! cmp {
    ($field:expr, $op:expr, $value:expr) => {
        $crate::ast::comparison::Comparison::parse($field, $op, $value)
            .map($crate::ast::expr::Expression::from)
    };
}
