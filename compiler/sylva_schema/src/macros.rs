//! Declaration macros for node shapes and variant groups.
//!
//! Field syntax inside [`declare_node_shape!`]:
//!
//! ```text
//! /// docs
//! @visit @bind(Let) name: kind(Type)
//! ```
//!
//! where `kind` is one of `scalar`, `child`, `optional`, `sequence`,
//! `optional_sequence`. `@visit` makes the field a visitor key and
//! `@bind(Kind)` a binding key of [`BindingKind::Kind`](crate::BindingKind).
//! Markers sit on the field they describe, so a key naming a field that
//! does not exist cannot be written.

/// Declare a node shape.
///
/// Generates the struct (every field public, `Clone + Debug + PartialEq`)
/// and its [`Node`](crate::Node), [`SyntaxElement`](crate::SyntaxElement)
/// and [`NodeShape`](crate::NodeShape) impls. The discriminant tag is the
/// struct name. Nothing is registered until the shape is passed to
/// [`RegistryBuilder::register_shape`](crate::RegistryBuilder::register_shape).
///
/// ```
/// use sylva_schema::{declare_node_shape, NodeShape};
///
/// declare_node_shape! {
///     pub struct Leaf {
///         value: scalar(u32),
///     }
/// }
///
/// declare_node_shape! {
///     /// Wraps exactly one leaf.
///     pub struct Wrapper {
///         @visit inner: child(Leaf),
///         label: scalar(String),
///     }
/// }
///
/// let decl = Wrapper::decl();
/// assert_eq!(decl.tag, "Wrapper");
/// assert_eq!(decl.visitor_keys, vec!["inner"]);
/// ```
#[macro_export]
macro_rules! declare_node_shape {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $(@ $marker:ident $(( $marker_arg:ident ))?)*
                $field:ident : $kind:ident ( $ty:ty )
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $crate::__node_field_type!($kind $ty),
            )*
        }

        impl $crate::Node for $name {
            fn tag(&self) -> &'static str {
                stringify!($name)
            }

            fn field(&self, name: &str) -> ::core::option::Option<$crate::FieldValue<'_>> {
                match name {
                    $(
                        stringify!($field) => ::core::option::Option::Some(
                            $crate::__node_field_value!($kind self.$field)
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }

        impl $crate::SyntaxElement for $name {
            const CHILD_TYPE: $crate::ChildType = $crate::ChildType::Shape(stringify!($name));

            fn as_node(&self) -> &dyn $crate::Node {
                self
            }
        }

        impl $crate::NodeShape for $name {
            const TAG: &'static str = stringify!($name);

            fn decl() -> $crate::ShapeDecl {
                let decl = $crate::ShapeDecl::new(stringify!($name));
                $(
                    let decl = decl.field(
                        stringify!($field),
                        $crate::__node_field_kind!($kind $ty),
                    );
                    $(
                        let decl = $crate::__node_field_marker!(
                            decl,
                            stringify!($field),
                            $marker $(($marker_arg))?
                        );
                    )*
                )*
                decl
            }
        }
    };
}

/// Declare a variant group over existing node shapes.
///
/// Generates a closed `enum` with one variant per member (named after the
/// member type), `From<Member>` impls, and the
/// [`SyntaxElement`](crate::SyntaxElement) and
/// [`VariantGroup`](crate::VariantGroup) impls. At least one member is
/// required.
///
/// A `match` over the group must name every member or use a wildcard, so
/// adding a member breaks every non-exhaustive consumer at build time:
///
/// ```compile_fail
/// use sylva_schema::{declare_node_shape, declare_variant_group};
///
/// declare_node_shape! { pub struct X {} }
/// declare_node_shape! { pub struct Y {} }
/// declare_node_shape! { pub struct Z {} }
/// declare_variant_group! { pub enum AnyXyz { X, Y, Z } }
///
/// fn describe(node: &AnyXyz) -> &'static str {
///     match node {
///         AnyXyz::X(_) => "x",
///         AnyXyz::Y(_) => "y",
///     }
/// }
/// ```
///
/// Handling every member compiles:
///
/// ```
/// use sylva_schema::{declare_node_shape, declare_variant_group, VariantGroup};
///
/// declare_node_shape! { pub struct X {} }
/// declare_node_shape! { pub struct Y {} }
/// declare_node_shape! { pub struct Z {} }
/// declare_variant_group! { pub enum AnyXyz { X, Y, Z } }
///
/// fn describe(node: &AnyXyz) -> &'static str {
///     match node {
///         AnyXyz::X(_) => "x",
///         AnyXyz::Y(_) => "y",
///         AnyXyz::Z(_) => "z",
///     }
/// }
///
/// let node = AnyXyz::from(Z {});
/// assert_eq!(describe(&node), "z");
/// assert_eq!(node.tag(), "Z");
/// assert_eq!(AnyXyz::MEMBERS, &["X", "Y", "Z"]);
/// ```
#[macro_export]
macro_rules! declare_variant_group {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis enum $name {
            $(
                $(#[$member_meta])*
                $member($member),
            )+
        }

        $(
            impl ::core::convert::From<$member> for $name {
                fn from(node: $member) -> Self {
                    $name::$member(node)
                }
            }
        )+

        impl $crate::SyntaxElement for $name {
            const CHILD_TYPE: $crate::ChildType = $crate::ChildType::Group(stringify!($name));

            fn as_node(&self) -> &dyn $crate::Node {
                match self {
                    $( $name::$member(node) => $crate::SyntaxElement::as_node(node), )+
                }
            }
        }

        impl $crate::VariantGroup for $name {
            const NAME: &'static str = stringify!($name);
            const MEMBERS: &'static [&'static str] =
                &[$( <$member as $crate::NodeShape>::TAG ),+];
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __node_field_type {
    (scalar $ty:ty) => { $ty };
    (child $ty:ty) => { ::std::boxed::Box<$ty> };
    (optional $ty:ty) => { ::core::option::Option<::std::boxed::Box<$ty>> };
    (sequence $ty:ty) => { ::std::vec::Vec<$ty> };
    (optional_sequence $ty:ty) => { ::core::option::Option<::std::vec::Vec<$ty>> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __node_field_kind {
    (scalar $ty:ty) => {
        $crate::FieldKind::Scalar
    };
    (child $ty:ty) => {
        $crate::FieldKind::Child(<$ty as $crate::SyntaxElement>::CHILD_TYPE)
    };
    (optional $ty:ty) => {
        $crate::FieldKind::OptionalChild(<$ty as $crate::SyntaxElement>::CHILD_TYPE)
    };
    (sequence $ty:ty) => {
        $crate::FieldKind::Sequence(<$ty as $crate::SyntaxElement>::CHILD_TYPE)
    };
    (optional_sequence $ty:ty) => {
        $crate::FieldKind::OptionalSequence(<$ty as $crate::SyntaxElement>::CHILD_TYPE)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __node_field_value {
    (scalar $e:expr) => {
        $crate::FieldValue::Scalar(&$e)
    };
    (child $e:expr) => {
        $crate::FieldValue::Node($crate::SyntaxElement::as_node(&*$e))
    };
    (optional $e:expr) => {
        match &$e {
            ::core::option::Option::Some(node) => {
                $crate::FieldValue::Node($crate::SyntaxElement::as_node(&**node))
            }
            ::core::option::Option::None => $crate::FieldValue::Absent,
        }
    };
    (sequence $e:expr) => {
        $crate::FieldValue::Nodes(
            $e.iter()
                .map(|node| $crate::SyntaxElement::as_node(node))
                .collect(),
        )
    };
    (optional_sequence $e:expr) => {
        match &$e {
            ::core::option::Option::Some(nodes) => $crate::FieldValue::Nodes(
                nodes
                    .iter()
                    .map(|node| $crate::SyntaxElement::as_node(node))
                    .collect(),
            ),
            ::core::option::Option::None => $crate::FieldValue::Absent,
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __node_field_marker {
    ($decl:ident, $field:expr, visit) => {
        $decl.visit($field)
    };
    ($decl:ident, $field:expr, bind($kind:ident)) => {
        $decl.bind($field, $crate::BindingKind::$kind)
    };
}
