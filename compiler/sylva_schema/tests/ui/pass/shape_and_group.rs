//! Shapes and a group declared downstream, registered and matched.

use sylva_schema::{declare_node_shape, declare_variant_group, Registry, VariantGroup};

declare_node_shape! {
    /// A name reference.
    pub struct Identifier {
        name: scalar(String),
    }
}

declare_node_shape! {
    pub struct NumberLiteral {
        value: scalar(f64),
    }
}

declare_variant_group! {
    pub enum AnyOperand {
        Identifier,
        NumberLiteral,
    }
}

declare_node_shape! {
    pub struct BinaryExpression {
        @visit left: child(AnyOperand),
        operator: scalar(&'static str),
        @visit right: child(AnyOperand),
    }
}

fn describe(operand: &AnyOperand) -> String {
    match operand {
        AnyOperand::Identifier(id) => id.name.clone(),
        AnyOperand::NumberLiteral(num) => num.value.to_string(),
    }
}

fn main() {
    let builder = Registry::builder();
    assert!(builder.register_shape::<Identifier>().is_ok());
    assert!(builder.register_shape::<NumberLiteral>().is_ok());
    assert!(builder.register_shape::<BinaryExpression>().is_ok());
    assert!(builder.register_variant_group::<AnyOperand>().is_ok());
    let registry = builder.finish();
    assert!(registry.is_ok_and(|registry| registry.lookup_group("AnyOperand").is_ok()));

    let expr = BinaryExpression {
        left: Box::new(AnyOperand::from(Identifier { name: "x".to_owned() })),
        operator: "+",
        right: Box::new(NumberLiteral { value: 1.0 }.into()),
    };
    assert_eq!(describe(&expr.left), "x");
    assert_eq!(expr.right.tag(), "NumberLiteral");
}
