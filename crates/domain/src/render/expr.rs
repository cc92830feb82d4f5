use crate::{
    ast::{
        comparison::Comparison, composite::CompositeDomain, custom::CustomDomain,
        expr::Expression,
    },
    render::{Render, Renderer},
};

impl Render for Expression {
    fn render(&self, r: &mut Renderer) {
        match self {
            Expression::Comparison(cmp) => cmp.render(r),
            Expression::Composite(composite) => composite.render(r),
            Expression::Custom(custom) => custom.render(r),
        }
    }
}

impl Render for Comparison {
    fn render(&self, r: &mut Renderer) {
        r.push_term(self.to_array());
    }
}

impl Render for CustomDomain {
    fn render(&self, r: &mut Renderer) {
        if self.is_term() {
            r.push_term(self.to_array());
        } else {
            r.push_items(self.to_array());
        }
    }
}

impl Render for CompositeDomain {
    fn render(&self, r: &mut Renderer) {
        if let Some(node) = self.prepare() {
            render_reduced(&node, r);
        }
    }
}

/// Writes a node produced by [`CompositeDomain::prepare`]. Nested composites
/// are spliced into the stream instead of nested as sub-arrays.
pub(crate) fn render_reduced(node: &Expression, r: &mut Renderer) {
    match node {
        Expression::Composite(composite) => {
            r.push_operator(composite.operator());
            for child in composite.iter() {
                render_reduced(child, r);
            }
        }
        terminal => terminal.render(r),
    }
}
