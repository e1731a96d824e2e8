use pretty_assertions::assert_eq;
mod common;

const SHAPE_MENU: &str = "\nElige una figura:\n\
                          1. Círculo\n\
                          2. Cuadrado\n\
                          3. Triángulo\n\
                          4. Rectángulo\n\
                          5. Pentágono\n\
                          0. Salir\n\
                          Opción: ";

const OPERATION_MENU: &str = "Elige una operación:\n\
                              1. Área\n\
                              2. Perímetro\n\
                              3. Potencia\n\
                              0. Volver\n\
                              Opción: ";

#[test]
fn test_exit_prints_empty_history() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (history, out) = common::run_session("0\n")?;

    assert!(history.is_empty());
    assert_eq!(out, format!("{SHAPE_MENU}Resultados almacenados:\n"));

    Ok(())
}

#[test]
fn test_full_transcript() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&["1", "2", "x", "1", "0"]);
    let (history, out) = common::run_session(&input)?;

    assert_eq!(history.values(), vec![6.2832]);
    assert_eq!(
        out,
        format!(
            "{SHAPE_MENU}{OPERATION_MENU}\
             Radio:\n\
             Valor: Entrada inválida. Ingresa un número válido.\n\
             Valor: Resultado: 6.2832\n\
             {SHAPE_MENU}\
             Resultados almacenados:\n\
             6.2832\n"
        )
    );

    Ok(())
}

#[test]
fn test_circle_area_prompt_shares_line() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&["1", "1", "2", "0"]);
    let (history, out) = common::run_session(&input)?;

    assert_eq!(history.values(), vec![12.5664]);
    assert_eq!(
        out,
        format!(
            "{SHAPE_MENU}{OPERATION_MENU}\
             Radio: Valor: Resultado: 12.5664\n\
             {SHAPE_MENU}\
             Resultados almacenados:\n\
             12.5664\n"
        )
    );

    Ok(())
}

#[test]
fn test_lowercase_infinity_is_rejected() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&["2", "1", "inf", "nan", "4", "0"]);
    let (history, out) = common::run_session(&input)?;

    assert_eq!(history.values(), vec![16.0]);
    assert_eq!(
        out.matches("Entrada inválida. Ingresa un número válido.").count(),
        2
    );
    assert!(out.ends_with("Resultados almacenados:\n16.0\n"));

    Ok(())
}

#[test]
fn test_menu_retries_do_not_affect_history() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&[
        "seven", "9", "-1", " 4 ", // rectangle after three rejected lines
        "4", "", "1", // area after two rejected lines
        "2", "3", // base, height
        "3", "0", // triangle, then back
        "2", "2", "5", // square perimeter
        "0",
    ]);
    let (history, out) = common::run_session(&input)?;

    assert_eq!(history.values(), vec![6.0, 20.0]);
    assert_eq!(out.matches("Por favor ingresa un número válido.").count(), 2);
    assert_eq!(out.matches("Opción fuera de rango.").count(), 3);
    assert!(out.ends_with("Resultados almacenados:\n6.0\n20.0\n"));

    Ok(())
}

#[test]
fn test_back_from_operation_menu() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&["5", "0", "0"]);
    let (history, out) = common::run_session(&input)?;

    assert!(history.is_empty());
    assert_eq!(
        out,
        format!("{SHAPE_MENU}{OPERATION_MENU}{SHAPE_MENU}Resultados almacenados:\n")
    );

    Ok(())
}

#[test]
fn test_power_from_any_shape() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&["3", "3", "2", "10", "1", "3", "0.5", "0", "0"]);
    let (history, out) = common::run_session(&input)?;

    assert_eq!(history.values(), vec![1024.0, 1.0]);
    assert!(out.contains("Resultado: 1024.0\n"));
    assert!(out.contains("Resultado: 1.0\n"));

    Ok(())
}

#[test]
fn test_every_formula() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let input = common::script(&[
        "1", "1", "1", // circle area, r = 1
        "2", "1", "4", // square area
        "2", "2", "4", // square perimeter
        "3", "1", "3", "4", // triangle area
        "3", "2", "3", "4", "5", // triangle perimeter
        "4", "1", "3", "4", // rectangle area
        "4", "2", "3", "4", // rectangle perimeter
        "5", "2", "2", // pentagon perimeter
        "0",
    ]);
    let (history, _) = common::run_session(&input)?;

    assert_eq!(
        history.values(),
        vec![3.1416, 16.0, 16.0, 6.0, 12.0, 12.0, 14.0, 10.0]
    );

    Ok(())
}

#[test]
fn test_large_results_use_scientific_notation() -> std::result::Result<(), Box<dyn std::error::Error>>
{
    let input = common::script(&["2", "1", "10000", "0"]);
    let (_, out) = common::run_session(&input)?;

    assert!(out.contains("Resultado: 1.0E8\n"));
    assert!(out.ends_with("Resultados almacenados:\n1.0E8\n"));

    Ok(())
}

#[test]
fn test_closed_input_ends_session() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let (history, out) = common::run_session("1\n1\n")?;

    assert!(history.is_empty());
    assert!(out.ends_with("Radio: Valor: Resultados almacenados:\n"));

    Ok(())
}
