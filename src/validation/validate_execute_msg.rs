use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::util::aliases::ContractResult;
use crate::util::functions::blank_field_messages;
use crate::util::traits::ResultExtensions;

/// Validates the integrity of an intercepted [ExecuteMsg](crate::core::msg::ExecuteMsg).  Only
/// structural problems are detected here.  Address validity and token ownership are verified by
/// each route.
///
/// # Parameters
///
/// * `msg` The execute msg sent to the [execute](crate::contract::execute) function.
pub fn validate_execute_msg(msg: &ExecuteMsg) -> ContractResult<()> {
    match msg {
        ExecuteMsg::Approve { to, .. } => {
            to_result("ExecuteMsg::Approve", blank_field_messages(&[("to", to.as_str())]))
        }
        ExecuteMsg::Transfer { to, .. } => {
            to_result("ExecuteMsg::Transfer", blank_field_messages(&[("to", to.as_str())]))
        }
        ExecuteMsg::TransferFrom { from, to, .. } => to_result(
            "ExecuteMsg::TransferFrom",
            blank_field_messages(&[("from", from.as_str()), ("to", to.as_str())]),
        ),
        ExecuteMsg::SetApprovalForAll { operator, .. } => to_result(
            "ExecuteMsg::SetApprovalForAll",
            blank_field_messages(&[("operator", operator.as_str())]),
        ),
    }
}

fn to_result<S: Into<String>>(message_type: S, invalid_fields: Vec<String>) -> ContractResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.into(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;

    use super::validate_execute_msg;

    #[test]
    fn test_valid_messages() {
        let messages = vec![
            ExecuteMsg::Approve {
                to: "spender".to_string(),
                token_id: 1,
            },
            ExecuteMsg::Transfer {
                to: "recipient".to_string(),
                token_id: 1,
            },
            ExecuteMsg::TransferFrom {
                from: "owner".to_string(),
                to: "recipient".to_string(),
                token_id: 1,
            },
            ExecuteMsg::SetApprovalForAll {
                operator: "operator".to_string(),
                approved: false,
            },
        ];
        for msg in messages {
            validate_execute_msg(&msg)
                .unwrap_or_else(|e| panic!("expected {:?} to be valid, but got: {:?}", msg, e));
        }
    }

    #[test]
    fn test_invalid_transfer_from_reports_all_blank_fields() {
        let error = validate_execute_msg(&ExecuteMsg::TransferFrom {
            from: String::new(),
            to: " ".to_string(),
            token_id: 1,
        })
        .unwrap_err();
        match error {
            ContractError::InvalidMessageFields {
                message_type,
                invalid_fields,
            } => {
                assert_eq!("ExecuteMsg::TransferFrom", message_type);
                assert_eq!(
                    vec![
                        "from: must not be blank".to_string(),
                        "to: must not be blank".to_string(),
                    ],
                    invalid_fields,
                    "both blank fields should be reported",
                );
            }
            _ => panic!("unexpected error encountered: {:?}", error),
        }
    }

    #[test]
    fn test_invalid_set_approval_for_all() {
        let error = validate_execute_msg(&ExecuteMsg::SetApprovalForAll {
            operator: String::new(),
            approved: true,
        })
        .unwrap_err();
        assert!(
            matches!(error, ContractError::InvalidMessageFields { .. }),
            "expected a blank operator to produce an invalid message fields error, but got: {:?}",
            error,
        );
    }
}
