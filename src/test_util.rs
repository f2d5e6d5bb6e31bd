/// Run a nom parser, check its output against `expect` and hand back the
/// input it left over.
#[allow(unused)]
pub fn generic_command_parse<F, I, T, E>(parser: F, input: I, expect: T) -> I
where
    F: Fn(I) -> Result<(I, T), E>,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug,
{
    match parser(input.clone()) {
        Ok((rest, res)) => {
            assert_eq!(
                expect, res,
                "Parsing ({:?}) gave ({:?}) instead of ({:?})",
                input, res, expect
            );
            rest
        }
        Err(e) => panic!("Parsing ({:?}) failed:\r\n{:#?}", input, e),
    }
}

/// Like `generic_command_parse`, for the crate's own `Result` returning funcs.
#[allow(unused)]
pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> crate::Result<T>,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let result = parser(input);
    assert!(result.is_ok(), "The result:\r\n{:#?}", result);
    let result = result.unwrap();
    assert_eq!(
        expect, result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, result
    );
}
