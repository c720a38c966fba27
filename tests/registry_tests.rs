//! Operator registry dispatch tests

use minitorch::{inv_back, log, log_back, relu, BinaryOp, Error, UnaryOp};

#[test]
fn test_unary_dispatch_matches_free_functions() {
    for op in UnaryOp::ALL {
        for x in [-2.0, 0.5, 3.0] {
            let via_registry = op.forward(x);
            let direct = match op {
                UnaryOp::Id => Ok(minitorch::id(x)),
                UnaryOp::Neg => Ok(minitorch::neg(x)),
                UnaryOp::Sigmoid => Ok(minitorch::sigmoid(x)),
                UnaryOp::Relu => Ok(relu(x)),
                UnaryOp::Log => log(x),
                UnaryOp::Exp => Ok(minitorch::exp(x)),
                UnaryOp::Inv => minitorch::inv(x),
            };
            assert_eq!(via_registry, direct, "{op} at {x}");
        }
    }
}

#[test]
fn test_binary_dispatch() {
    assert_eq!(BinaryOp::Add.forward(2.0, 3.0), 5.0);
    assert_eq!(BinaryOp::Mul.forward(2.0, 3.0), 6.0);
    assert_eq!(BinaryOp::Eq.forward(2.0, 2.0), 1.0);
    assert_eq!(BinaryOp::Max.forward(2.0, 2.0), 2.0);
}

#[test]
fn test_backward_pass_uniform_calls() {
    // Upstream gradient fed through each differentiable node.
    let d = 2.0;
    assert_eq!(
        UnaryOp::Log.backward(1.0, d).unwrap(),
        log_back(1.0, d)
    );
    assert_eq!(
        UnaryOp::Inv.backward(0.0, d).unwrap(),
        inv_back(0.0, d)
    );
    assert_eq!(UnaryOp::Relu.backward(-1.0, d), Some(Ok(0.0)));
    assert_eq!(UnaryOp::Neg.backward(1.0, d), None);
}

#[test]
fn test_lookup_by_name() {
    let op: UnaryOp = "relu".parse().expect("known operator");
    assert_eq!(op, UnaryOp::Relu);
    assert_eq!(op.to_string(), "relu");

    let err = BinaryOp::from_name("pow").unwrap_err();
    assert_eq!(err, Error::UnknownOperator("pow".into()));
    assert!(!err.is_domain_error());
}

#[test]
fn test_serialized_graph_ops() {
    let ops = vec![UnaryOp::Log, UnaryOp::Inv, UnaryOp::Exp];
    let json = serde_json::to_string(&ops).unwrap();
    assert_eq!(json, r#"["log","inv","exp"]"#);

    let decoded: Vec<UnaryOp> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, ops);
}
