use itertools::assert_equal;
use ndarray::{arr1, arr2, Axis};

use named_gen::{NameGenerator, NamedArrayBuilder};
use ndarray_named::prelude::*;
use ndarray_named::{ErrorKind, KeyType};

fn table() -> NamedArray<i32>
{
    NamedArray::with_names(
        arr2(&[[1, 2, 3], [4, 5, 6]]),
        vec![
            vec![Key::from("one"), Key::from("two")],
            vec![Key::sym("a"), Key::sym("b"), Key::sym("c")],
        ],
        None,
    )
    .unwrap()
}

#[test]
fn rebuild_reads_back()
{
    let mut a = table();
    let cols = vec![Key::sym("x"), Key::sym("y"), Key::sym("z")];
    a.set_names(Axis(1), cols.clone()).unwrap();
    assert_eq!(a.names(Axis(1)).keys(), &cols[..]);
    assert_eq!(a.select(&nx!["one", Key::sym("z")]).unwrap().into_scalar(), Some(3));

    // wrong type, wrong length, duplicates: all leave the names alone
    let err = a
        .set_names(Axis(1), vec![Key::from("x"), Key::from("y"), Key::from("z")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    let err = a.set_names(Axis(1), vec![Key::sym("x")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
    let err = a
        .set_names(Axis(1), vec![Key::sym("x"), Key::sym("x"), Key::sym("z")])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    assert_eq!(a.names(Axis(1)).keys(), &cols[..]);
}

#[test]
fn default_names_take_their_type_from_the_first_rebuild()
{
    let mut a = NamedArray::<_, Key>::new(arr1(&[1, 2]));
    assert_eq!(a.names(Axis(0)).key_type(), None);
    a.set_names(Axis(0), vec![Key::Int(10), Key::Int(20)]).unwrap();
    assert_eq!(a.names(Axis(0)).key_type(), Some(KeyType::Int));
    let err = a.set_names(Axis(0), vec![Key::sym("p"), Key::sym("q")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn rename_single_entries()
{
    let mut a = table();
    a.rename(Axis(0), &Key::from("one"), Key::from("first")).unwrap();
    assert_eq!(a.select(&nx!["first", 0]).unwrap().into_scalar(), Some(1));
    assert_eq!(
        a.select(&nx!["one", 0]).unwrap_err().kind(),
        ErrorKind::UnknownName
    );

    a.rename_at(Axis(1), 2, Key::sym("last")).unwrap();
    assert_eq!(a.names(Axis(1)).key(2), Some(&Key::sym("last")));

    // an entry keeps its own name without complaint
    let before = a.clone();
    a.rename_at(Axis(1), 0, Key::sym("a")).unwrap();
    assert_eq!(a, before);

    let err = a.rename_at(Axis(1), 0, Key::sym("b")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    let err = a.rename_at(Axis(1), 3, Key::sym("d")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    let err = a.rename(Axis(1), &Key::sym("nope"), Key::sym("d")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownName);
}

#[test]
fn relabel_axes()
{
    let mut a = table();
    a.set_dim_label(Axis(0), "row");
    assert_eq!(a.axis_of(&Key::from("row")), Some(Axis(0)));
    assert_eq!(a.select(&nx!["row" => "two", "B" => 0]).unwrap().into_scalar(), Some(4));

    a.set_dim_labels(vec![Key::from("r"), Key::from("c")]).unwrap();
    assert_eq!(a.dim_labels(), &[Key::from("r"), Key::from("c")][..]);
    let err = a.set_dim_labels(vec![Key::from("r")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthMismatch);
}

#[test]
fn concatenate_rows()
{
    let a = table();
    let b = table().mapv(|x| x * 10);
    let c = concatenate(Axis(0), &[&a, &b]).unwrap();
    assert_eq!(c.shape(), &[4, 3]);
    assert_eq!(c.names(Axis(1)), a.names(Axis(1)));
    assert_eq!(
        c.names(Axis(0)).keys(),
        &[Key::from("1"), Key::from("2"), Key::from("3"), Key::from("4")][..]
    );
    assert_eq!(c.select(&nx!["4", Key::sym("c")]).unwrap().into_scalar(), Some(60));
    assert_eq!(c.dim_labels(), a.dim_labels());
}

#[test]
fn concatenate_disagreeing_names_and_labels()
{
    let a = table();
    let mut b = table();
    b.set_names(Axis(1), vec![Key::sym("p"), Key::sym("q"), Key::sym("r")])
        .unwrap();
    b.set_dim_label(Axis(1), "col");
    let c = concatenate(Axis(0), &[&a, &b]).unwrap();
    assert_eq!(c.names(Axis(1)).keys(), NameTable::<Key>::positional(3).keys());
    assert_eq!(c.dim_label(Axis(1)), &Key::from("B"));

    let err = concatenate(Axis(1), &[&a, &table().select(&nx![["one"], ..]).unwrap().into_array().unwrap()])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

    let none: [&NamedArray<i32>; 0] = [];
    assert_eq!(concatenate(Axis(0), &none).unwrap_err().kind(), ErrorKind::ShapeMismatch);
}

#[test]
fn permute_and_swap()
{
    let a = table();
    let t = a.clone().reversed_axes();
    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.dim_labels(), &[Key::from("B"), Key::from("A")][..]);
    assert_eq!(t.select(&nx![Key::sym("c"), "two"]).unwrap().into_scalar(), Some(6));

    let mut s = a.clone();
    s.swap_axes(0, 1);
    assert_eq!(s, t);

    let p = a.permuted_axes(&[1, 0]);
    assert_eq!(p, t);
}

#[test]
fn invert_keeps_names_with_entries()
{
    let mut a = table();
    a.invert_axis(Axis(1));
    assert_equal(a.select(&nx!["one", ..]).unwrap().into_array().unwrap().array().iter().copied(), [3, 2, 1]);
    assert_eq!(a.select(&nx!["one", Key::sym("a")]).unwrap().into_scalar(), Some(1));
}

#[test]
fn roll_and_circshift()
{
    let a = NamedArrayBuilder::new(&[2, 3])
        .names(NameGenerator::Symbols)
        .build::<i32>();
    let r = a.roll(Axis(1), -1);
    assert_eq!(r.array(), &arr2(&[[1, 2, 0], [4, 5, 3]]).into_dyn());
    assert_eq!(
        r.names(Axis(1)).keys(),
        &[Key::sym("b1"), Key::sym("b2"), Key::sym("b0")][..]
    );

    let c = a.circshift(&[1, 1]);
    assert_eq!(c.array(), &arr2(&[[5, 3, 4], [2, 0, 1]]).into_dyn());
    // every entry is still found by its names
    for (row, i) in a.names(Axis(0)) {
        for (col, j) in a.names(Axis(1)) {
            let v = c.select(&[name(row.clone()), name(col.clone())]).unwrap().into_scalar();
            assert_eq!(v, Some((i * 3 + j) as i32));
        }
    }

    // a full turn is the identity
    assert_eq!(a.roll(Axis(0), 2), a);
}

#[test]
fn reductions_name_the_folded_entry()
{
    let a = table();
    let s = a.sum_axis(Axis(1));
    assert_eq!(s.shape(), &[2, 1]);
    assert_eq!(s.names(Axis(1)).keys(), &[Key::from("sum(B)")][..]);
    assert_eq!(s.select(&nx!["two", "sum(B)"]).unwrap().into_scalar(), Some(15));

    let m = a.mapv(|x| x as f64).mean_axis(Axis(0)).unwrap();
    assert_equal(m.array().iter().copied(), [2.5, 3.5, 4.5]);
    assert_eq!(m.names(Axis(1)), a.names(Axis(1)));
}

#[test]
fn map_keeps_names()
{
    let a = table();
    let b = a.map(|x| x.to_string());
    assert_eq!(b.name_tables(), a.name_tables());
    assert_eq!(b.select(&nx!["two", Key::sym("c")]).unwrap().into_scalar(), Some("6".to_string()));
}

#[cfg(feature = "approx")]
#[test]
fn approx_compares_names_exactly()
{
    use approx::assert_abs_diff_eq;

    let a = table().mapv(|x| x as f64 / 3.);
    let b = table().mapv(|x| x as f64 * (1. / 3.));
    assert_abs_diff_eq!(a, b, epsilon = 1e-12);
}
