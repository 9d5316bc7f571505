//! Drives the `calculator` module through an embedded interpreter, the way a
//! Python caller sees it.

use calculator::calculator_module;
use pyo3::{
    exceptions::{PyRuntimeError, PyTypeError},
    prelude::*,
    types::{PyDict, PyModule},
    wrap_pymodule,
};
use std::ffi::CStr;

fn with_module<F>(f: F)
where
    F: for<'py> FnOnce(Python<'py>, &Bound<'py, PyModule>) -> PyResult<()>,
{
    Python::with_gil(|py| {
        let module = wrap_pymodule!(calculator_module)(py);
        f(py, module.bind(py))
    })
    .unwrap();
}

/// Run Python source with the module bound to the name `calculator`.
fn run_python(py: Python<'_>, module: &Bound<'_, PyModule>, code: &CStr) -> PyResult<()> {
    let globals = PyDict::new(py);
    globals.set_item("calculator", module)?;
    py.run(code, Some(&globals), None)
}

#[test]
fn basic_operations() {
    with_module(|_py, module| {
        let calc = module.getattr("Calculator")?.call0()?;

        // Python ints are accepted and come back as floats
        assert_eq!(calc.call_method1("add", (2, 3))?.extract::<f64>()?, 5.0);
        assert_eq!(calc.call_method1("subtract", (5, 3))?.extract::<f64>()?, 2.0);
        assert_eq!(calc.call_method1("multiply", (3, 4))?.extract::<f64>()?, 12.0);
        assert_eq!(calc.call_method1("divide", (10, 2))?.extract::<f64>()?, 5.0);
        assert_eq!(calc.call_method1("divide", (1.0, 4.0))?.extract::<f64>()?, 0.25);
        Ok(())
    });
}

#[test]
fn divide_by_zero_raises_runtime_error() {
    with_module(|py, module| {
        let calc = module.getattr("Calculator")?.call0()?;

        let err = calc.call_method1("divide", (10, 0)).unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));
        assert!(err.value(py).to_string().to_lowercase().contains("zero"));
        Ok(())
    });
}

#[test]
fn held_value() {
    with_module(|_py, module| {
        let class = module.getattr("Calculator")?;

        let calc = class.call0()?;
        assert_eq!(calc.call_method0("get_value")?.extract::<f64>()?, 0.0);

        calc.call_method1("set_value", (42.5,))?;
        assert_eq!(calc.call_method0("get_value")?.extract::<f64>()?, 42.5);

        let calc2 = class.call1((100.0,))?;
        assert_eq!(calc2.call_method0("get_value")?.extract::<f64>()?, 100.0);
        assert_eq!(calc2.repr()?.to_string(), "Calculator(value=100.0)");
        Ok(())
    });
}

#[test]
fn keyword_arguments() {
    with_module(|py, module| {
        run_python(
            py,
            module,
            c"
calc = calculator.Calculator(initial_value=2.5)
assert calc.get_value() == 2.5
calc.set_value(value=7)
assert calc.get_value() == 7.0
assert calc.divide(a=9, b=3) == 3.0
assert calc.sum(numbers=[1, 2]) == 3.0
assert calc.greet(name='kw') == 'Hello, kw! Welcome to the Calculator.'
assert calculator.Calculator.power(base=2, exponent=10) == 1024.0
assert calculator.compute_area(radius=0) == 0.0
assert calculator.generate_fibonacci(n=3) == [0, 1, 1]
",
        )
    });
}

#[test]
fn sequence_operations() {
    with_module(|py, module| {
        let calc = module.getattr("Calculator")?.call0()?;
        let numbers = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        assert_eq!(calc.call_method1("sum", (numbers.clone(),))?.extract::<f64>()?, 15.0);
        assert_eq!(calc.call_method1("average", (numbers,))?.extract::<f64>()?, 3.0);

        // Tuples of ints work as well as lists of floats
        run_python(
            py,
            module,
            c"
calc = calculator.Calculator()
assert calc.sum((1, 2, 3)) == 6.0
assert calc.sum([]) == 0.0
assert abs(calc.average([1.5, 2.5, 3.5, 4.5, 5.5]) - 3.5) < 1e-10
",
        )?;

        let err = calc
            .call_method1("average", (Vec::<f64>::new(),))
            .unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));
        assert!(err.value(py).to_string().contains("empty"));
        Ok(())
    });
}

#[test]
fn unconvertible_arguments_raise_type_error() {
    with_module(|py, module| {
        let calc = module.getattr("Calculator")?.call0()?;

        let err = calc.call_method1("add", ("two", 3)).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));

        let err = calc.call_method1("sum", ("123",)).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
        Ok(())
    });
}

#[test]
fn static_power() {
    with_module(|_py, module| {
        let class = module.getattr("Calculator")?;
        assert_eq!(class.call_method1("power", (2, 3))?.extract::<f64>()?, 8.0);
        assert_eq!(class.call_method1("power", (2, 8))?.extract::<f64>()?, 256.0);

        // Also reachable through an instance
        let calc = class.call0()?;
        assert_eq!(calc.call_method1("power", (4.0, 0.5))?.extract::<f64>()?, 2.0);
        Ok(())
    });
}

#[test]
fn free_functions() {
    with_module(|py, module| {
        let area: f64 = module.getattr("compute_area")?.call1((5.0,))?.extract()?;
        assert!((area - std::f64::consts::PI * 25.0).abs() < 1e-10);

        let fib: Vec<i64> = module
            .getattr("generate_fibonacci")?
            .call1((10,))?
            .extract()?;
        assert_eq!(fib, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);

        run_python(
            py,
            module,
            c"
assert calculator.generate_fibonacci(0) == []
fib = calculator.generate_fibonacci(93)
assert type(fib) is list and type(fib[0]) is int
assert fib[-1] == 7540113804746346429
",
        )
    });
}

#[test]
fn free_function_failures_raise_runtime_error() {
    with_module(|py, module| {
        let err = module
            .getattr("compute_area")?
            .call1((-1.0,))
            .unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));
        assert!(err.value(py).to_string().contains("Invalid"));

        let err = module
            .getattr("generate_fibonacci")?
            .call1((-1,))
            .unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));
        assert!(err.value(py).to_string().contains("negative"));

        let err = module
            .getattr("generate_fibonacci")?
            .call1((94,))
            .unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));
        assert!(err.value(py).to_string().to_lowercase().contains("overflow"));
        Ok(())
    });
}

#[test]
fn every_failure_is_exactly_runtime_error() {
    with_module(|py, module| {
        run_python(
            py,
            module,
            c"
calc = calculator.Calculator()
for call in (
    lambda: calc.divide(1, 0),
    lambda: calc.average([]),
    lambda: calculator.compute_area(-2),
    lambda: calculator.generate_fibonacci(-3),
    lambda: calculator.generate_fibonacci(200),
):
    try:
        call()
    except Exception as e:
        assert type(e) is RuntimeError, type(e)
    else:
        raise AssertionError('expected RuntimeError')
",
        )
    });
}

#[test]
fn greeting() {
    with_module(|_py, module| {
        let calc = module.getattr("Calculator")?.call0()?;
        let greeting: String = calc.call_method1("greet", ("Python",))?.extract()?;
        assert!(greeting.contains("Hello"));
        assert!(greeting.contains("Python"));
        Ok(())
    });
}

#[test]
#[allow(clippy::approx_constant)]
fn module_attributes() {
    with_module(|py, module| {
        assert_eq!(module.getattr("PI")?.extract::<f64>()?, 3.141592653589793);
        assert_eq!(module.getattr("VERSION")?.extract::<String>()?, "1.0.0");

        run_python(
            py,
            module,
            c"
assert calculator.__name__ == 'calculator'
assert calculator.__doc__
assert calculator.Calculator.__doc__
assert calculator.Calculator.divide.__doc__
assert calculator.compute_area.__doc__
",
        )
    });
}
