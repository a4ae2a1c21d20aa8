//! Syntax trees in the interpreter's JSON format, for tests that must not depend on a Python
//! interpreter.

use crate::python::ast::PythonAST;

/// Source text of [`scenario_tree`].
pub static SCENARIO_SOURCE: &str = "x = 1\nif x > 0:\n    y = x + 1\n";

static SCENARIO_JSON: &str = r#"{
  "ast_type": "Module",
  "node_id": 0,
  "body": [
    {
      "ast_type": "Assign",
      "node_id": 1,
      "targets": [
        {
          "ast_type": "Name",
          "node_id": 2,
          "id": "x",
          "ctx": {
            "ast_type": "Store",
            "node_id": 3
          }
        }
      ],
      "value": {
        "ast_type": "Constant",
        "node_id": 4,
        "value": 1,
        "repr": "1",
        "kind": null
      },
      "type_comment": null
    },
    {
      "ast_type": "If",
      "node_id": 5,
      "test": {
        "ast_type": "Compare",
        "node_id": 6,
        "left": {
          "ast_type": "Name",
          "node_id": 7,
          "id": "x",
          "ctx": {
            "ast_type": "Load",
            "node_id": 8
          }
        },
        "ops": [
          {
            "ast_type": "Gt",
            "node_id": 9
          }
        ],
        "comparators": [
          {
            "ast_type": "Constant",
            "node_id": 10,
            "value": 0,
            "repr": "0",
            "kind": null
          }
        ]
      },
      "body": [
        {
          "ast_type": "Assign",
          "node_id": 11,
          "targets": [
            {
              "ast_type": "Name",
              "node_id": 12,
              "id": "y",
              "ctx": {
                "ast_type": "Store",
                "node_id": 13
              }
            }
          ],
          "value": {
            "ast_type": "BinOp",
            "node_id": 14,
            "left": {
              "ast_type": "Name",
              "node_id": 15,
              "id": "x",
              "ctx": {
                "ast_type": "Load",
                "node_id": 16
              }
            },
            "op": {
              "ast_type": "Add",
              "node_id": 17
            },
            "right": {
              "ast_type": "Constant",
              "node_id": 18,
              "value": 1,
              "repr": "1",
              "kind": null
            }
          },
          "type_comment": null
        }
      ],
      "orelse": []
    }
  ],
  "type_ignores": []
}"#;

/// Source text of [`loop_tree`].
pub static LOOP_SOURCE: &str = "total = 0\nwhile total < 10 and not done:\n    total += step % 3\n";

static LOOP_JSON: &str = r#"{
  "ast_type": "Module",
  "node_id": 0,
  "body": [
    {
      "ast_type": "Assign",
      "node_id": 1,
      "targets": [
        {
          "ast_type": "Name",
          "node_id": 2,
          "id": "total",
          "ctx": {
            "ast_type": "Store",
            "node_id": 3
          }
        }
      ],
      "value": {
        "ast_type": "Constant",
        "node_id": 4,
        "value": 0,
        "repr": "0",
        "kind": null
      },
      "type_comment": null
    },
    {
      "ast_type": "While",
      "node_id": 5,
      "test": {
        "ast_type": "BoolOp",
        "node_id": 6,
        "op": {
          "ast_type": "And",
          "node_id": 7
        },
        "values": [
          {
            "ast_type": "Compare",
            "node_id": 8,
            "left": {
              "ast_type": "Name",
              "node_id": 9,
              "id": "total",
              "ctx": {
                "ast_type": "Load",
                "node_id": 10
              }
            },
            "ops": [
              {
                "ast_type": "Lt",
                "node_id": 11
              }
            ],
            "comparators": [
              {
                "ast_type": "Constant",
                "node_id": 12,
                "value": 10,
                "repr": "10",
                "kind": null
              }
            ]
          },
          {
            "ast_type": "UnaryOp",
            "node_id": 13,
            "op": {
              "ast_type": "Not",
              "node_id": 14
            },
            "operand": {
              "ast_type": "Name",
              "node_id": 15,
              "id": "done",
              "ctx": {
                "ast_type": "Load",
                "node_id": 16
              }
            }
          }
        ]
      },
      "body": [
        {
          "ast_type": "AugAssign",
          "node_id": 17,
          "target": {
            "ast_type": "Name",
            "node_id": 18,
            "id": "total",
            "ctx": {
              "ast_type": "Store",
              "node_id": 19
            }
          },
          "op": {
            "ast_type": "Add",
            "node_id": 20
          },
          "value": {
            "ast_type": "BinOp",
            "node_id": 21,
            "left": {
              "ast_type": "Name",
              "node_id": 22,
              "id": "step",
              "ctx": {
                "ast_type": "Load",
                "node_id": 23
              }
            },
            "op": {
              "ast_type": "Mod",
              "node_id": 24
            },
            "right": {
              "ast_type": "Constant",
              "node_id": 25,
              "value": 3,
              "repr": "3",
              "kind": null
            }
          }
        }
      ],
      "orelse": []
    }
  ],
  "type_ignores": []
}"#;

/// Source text of [`operator_tree`].
pub static OPERATOR_SOURCE: &str = "r = a * b - c / d\nok = a >= b or a in xs and b is not None\n";

static OPERATOR_JSON: &str = r#"{
  "ast_type": "Module",
  "node_id": 0,
  "body": [
    {
      "ast_type": "Assign",
      "node_id": 1,
      "targets": [
        {
          "ast_type": "Name",
          "node_id": 2,
          "id": "r",
          "ctx": {
            "ast_type": "Store",
            "node_id": 3
          }
        }
      ],
      "value": {
        "ast_type": "BinOp",
        "node_id": 4,
        "left": {
          "ast_type": "BinOp",
          "node_id": 5,
          "left": {
            "ast_type": "Name",
            "node_id": 6,
            "id": "a",
            "ctx": {
              "ast_type": "Load",
              "node_id": 7
            }
          },
          "op": {
            "ast_type": "Mult",
            "node_id": 8
          },
          "right": {
            "ast_type": "Name",
            "node_id": 9,
            "id": "b",
            "ctx": {
              "ast_type": "Load",
              "node_id": 10
            }
          }
        },
        "op": {
          "ast_type": "Sub",
          "node_id": 11
        },
        "right": {
          "ast_type": "BinOp",
          "node_id": 12,
          "left": {
            "ast_type": "Name",
            "node_id": 13,
            "id": "c",
            "ctx": {
              "ast_type": "Load",
              "node_id": 14
            }
          },
          "op": {
            "ast_type": "Div",
            "node_id": 15
          },
          "right": {
            "ast_type": "Name",
            "node_id": 16,
            "id": "d",
            "ctx": {
              "ast_type": "Load",
              "node_id": 17
            }
          }
        }
      },
      "type_comment": null
    },
    {
      "ast_type": "Assign",
      "node_id": 18,
      "targets": [
        {
          "ast_type": "Name",
          "node_id": 19,
          "id": "ok",
          "ctx": {
            "ast_type": "Store",
            "node_id": 20
          }
        }
      ],
      "value": {
        "ast_type": "BoolOp",
        "node_id": 21,
        "op": {
          "ast_type": "Or",
          "node_id": 22
        },
        "values": [
          {
            "ast_type": "Compare",
            "node_id": 23,
            "left": {
              "ast_type": "Name",
              "node_id": 24,
              "id": "a",
              "ctx": {
                "ast_type": "Load",
                "node_id": 25
              }
            },
            "ops": [
              {
                "ast_type": "GtE",
                "node_id": 26
              }
            ],
            "comparators": [
              {
                "ast_type": "Name",
                "node_id": 27,
                "id": "b",
                "ctx": {
                  "ast_type": "Load",
                  "node_id": 28
                }
              }
            ]
          },
          {
            "ast_type": "BoolOp",
            "node_id": 29,
            "op": {
              "ast_type": "And",
              "node_id": 30
            },
            "values": [
              {
                "ast_type": "Compare",
                "node_id": 31,
                "left": {
                  "ast_type": "Name",
                  "node_id": 32,
                  "id": "a",
                  "ctx": {
                    "ast_type": "Load",
                    "node_id": 33
                  }
                },
                "ops": [
                  {
                    "ast_type": "In",
                    "node_id": 34
                  }
                ],
                "comparators": [
                  {
                    "ast_type": "Name",
                    "node_id": 35,
                    "id": "xs",
                    "ctx": {
                      "ast_type": "Load",
                      "node_id": 36
                    }
                  }
                ]
              },
              {
                "ast_type": "Compare",
                "node_id": 37,
                "left": {
                  "ast_type": "Name",
                  "node_id": 38,
                  "id": "b",
                  "ctx": {
                    "ast_type": "Load",
                    "node_id": 39
                  }
                },
                "ops": [
                  {
                    "ast_type": "IsNot",
                    "node_id": 40
                  }
                ],
                "comparators": [
                  {
                    "ast_type": "Constant",
                    "node_id": 41,
                    "value": null,
                    "repr": "None",
                    "kind": null
                  }
                ]
              }
            ]
          }
        ]
      },
      "type_comment": null
    }
  ],
  "type_ignores": []
}"#;

/// The tree for [`SCENARIO_SOURCE`].
///
/// Monitored nodes in post-order: `x = 1` (0), `x > 0` (1), `x + 1` (2), `y = x + 1` (3) and
/// the `if` statement (4).
pub fn scenario_tree() -> PythonAST {
    serde_json::from_str(SCENARIO_JSON).unwrap()
}

/// The tree for [`LOOP_SOURCE`].
///
/// Monitored nodes in post-order: `total = 0` (0), `total < 10` (1), the `and` (2),
/// `step % 3` (3, not eligible), `total += ...` (4) and the `while` statement (5).
pub fn loop_tree() -> PythonAST {
    serde_json::from_str(LOOP_JSON).unwrap()
}

/// The tree for [`OPERATOR_SOURCE`].
///
/// Monitored nodes in post-order: `a * b` (0), `c / d` (1), the `-` (2), the first assignment
/// (3), `a >= b` (4), `a in xs` (5), `b is not None` (6), the `and` (7), the `or` (8) and the
/// second assignment (9).
pub fn operator_tree() -> PythonAST {
    serde_json::from_str(OPERATOR_JSON).unwrap()
}
