use kitbag::error::{KitbagError, Result};
use kitbag::mapping;
use kitbag::transform::{
    invoke, map, pluck, reduce, reduce_from, ByFunction, ByMethod, MethodDispatch,
};

struct Fighter {
    name: &'static str,
    reach: i64,
}

impl MethodDispatch for Fighter {
    type Arg = i64;
    type Output = i64;

    fn dispatch(&self, method: &str, args: &[i64]) -> Result<i64> {
        match method {
            "reach" => Ok(self.reach),
            "reach_plus" => Ok(self.reach + args.iter().sum::<i64>()),
            unknown => Err(KitbagError::InvalidArgument(format!(
                "no method named '{unknown}'"
            ))),
        }
    }
}

fn roster() -> Vec<Fighter> {
    vec![
        Fighter { name: "ali", reach: 78 },
        Fighter { name: "frazier", reach: 73 },
    ]
}

#[test]
fn map_produces_a_fresh_sequence() {
    let numbers = vec![1, 2, 3];
    let doubled = map(&numbers, |n| n * 2);
    assert_eq!(doubled, vec![2, 4, 6]);
    assert_eq!(numbers, vec![1, 2, 3]);

    let identical = map(&numbers, |n| *n);
    assert_eq!(identical, numbers);
    // Same contents, different allocation.
    assert_ne!(identical.as_ptr(), numbers.as_ptr());
}

#[test]
fn pluck_reads_a_field_from_every_record() {
    let stooges = vec![
        mapping! {"name" => "moe"},
        mapping! {"name" => "larry"},
        mapping! {"title" => "boss"},
    ];
    let names = pluck(&stooges, "name");
    assert_eq!(names, vec![Some("moe"), Some("larry"), None]);
}

#[test]
fn invoke_dispatches_a_method_by_name() {
    let fighters = roster();
    let reaches = invoke(&fighters, ByMethod("reach"), &[]).expect("known method");
    assert_eq!(reaches, vec![78, 73]);
    let extended = invoke(&fighters, ByMethod("reach_plus"), &[2, 1]).expect("known method");
    assert_eq!(extended, vec![81, 76]);
}

#[test]
fn invoke_fails_fast_on_an_unknown_method() {
    let fighters = roster();
    let err = invoke(&fighters, ByMethod("wingspan"), &[]).unwrap_err();
    assert!(format!("{}", err).contains("wingspan"));
}

#[test]
fn invoke_accepts_a_function_instead_of_a_name() {
    let fighters = roster();
    let described = invoke(
        &fighters,
        ByFunction(|fighter: &Fighter, _: &[i64]| {
            format!("{} ({})", fighter.name, fighter.reach)
        }),
        &[],
    )
    .expect("function invocations cannot fail");
    assert_eq!(described, vec!["ali (78)", "frazier (73)"]);
}

#[test]
fn reduce_seeds_from_the_first_element() {
    let numbers = vec![1, 2, 3, 4];
    let sum = reduce(&numbers, |total, n| total + n).expect("non-empty");
    assert_eq!(sum, 10);
}

#[test]
fn reduce_refuses_an_empty_collection_without_a_seed() {
    let nothing: Vec<i32> = Vec::new();
    let err = reduce(&nothing, |total, n| total + n).unwrap_err();
    assert!(matches!(err, KitbagError::EmptyReduce));
}

#[test]
fn reduce_from_folds_into_a_different_accumulator_type() {
    let words = vec!["kit", "and", "caboodle"];
    let glued = reduce_from(
        &words,
        |mut sentence: String, word| {
            if !sentence.is_empty() {
                sentence.push(' ');
            }
            sentence.push_str(word);
            sentence
        },
        String::new(),
    );
    assert_eq!(glued, "kit and caboodle");

    let numbers = vec![1, 2, 3, 4];
    assert_eq!(reduce_from(&numbers, |total, n| total + n, 0), 10);

    // An empty collection folds to the seed unchanged.
    let nothing: Vec<i32> = Vec::new();
    assert_eq!(reduce_from(&nothing, |total, n| total + n, 41), 41);
}

#[test]
fn reduce_walks_keyed_collections_too() {
    let scores = mapping! {"a" => 1, "b" => 2, "c" => 3};
    let total = reduce_from(&scores, |sum, n| sum + n, 0);
    assert_eq!(total, 6);
    let seeded = reduce(&scores, |biggest, n| biggest.max(*n)).expect("non-empty");
    assert_eq!(seeded, 3);
}
