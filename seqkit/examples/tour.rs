//! Walkthrough of every sequence operation with printed results

use seqkit::{
    chunk, filter, flatten, group_by, last_index, map, min_max, min_max_func, partition, reduce,
    sorted_groups, unique, unique_by, Result,
};

#[derive(Debug, Clone, PartialEq)]
struct User {
    name: &'static str,
    email: &'static str,
}

#[derive(Debug)]
struct Person {
    name: &'static str,
    age: i32,
}

fn main() -> Result<()> {
    let numbers = [1, 2, 3, 4, 5, 6];

    let evens = filter(&numbers, |n| n % 2 == 0);
    println!("filter evens:      {evens:?}");

    let labels = map(&numbers[..3], |n| format!("n={n}"));
    println!("map labels:        {labels:?}");

    let sum = reduce(&numbers[..4], 0, |acc, n| acc + n);
    let joined = reduce(&["go", " ", "lang"], String::new(), |acc, s| acc + *s);
    println!("reduce sum:        {sum}");
    println!("reduce concat:     {joined:?}");

    let letters = ["a", "b", "c", "b"];
    println!("last_index b:      {:?}", last_index(&letters, &"b"));
    println!("last_index z:      {:?}", last_index(&letters, &"z"));

    let (even, odd) = partition(&numbers, |n| n % 2 == 0);
    println!("partition:         {even:?} {odd:?}");

    // Print groups in key order for stable output
    let by_len = group_by(&["a", "bb", "ccc", "dd", "e"], |s| s.len());
    for (len, words) in sorted_groups(by_len) {
        println!("group_by len {len}:    {words:?}");
    }

    let nested = vec![vec![1, 2], vec![], vec![3], vec![4, 5]];
    println!("flatten:           {:?}", flatten(&nested));

    println!("unique:            {:?}", unique(&[1, 2, 1, 3, 2, 4, 4]));

    let users = [
        User { name: "Alice", email: "a@example.com" },
        User { name: "Bob", email: "b@example.com" },
        User { name: "Alice Clone", email: "a@example.com" },
    ];
    let names = map(&unique_by(&users, |u| u.email), |u| u.name);
    println!("unique_by email:   {names:?}");

    println!("chunk by 2:        {:?}", chunk(&[1, 2, 3, 4, 5], 2)?);

    let (min, max) = min_max(&[5, 2, 9, 1]);
    println!("min_max:           ({min}, {max})");

    let people = [
        Person { name: "Alice", age: 30 },
        Person { name: "Bob", age: 25 },
        Person { name: "Charlie", age: 40 },
    ];
    let (youngest, oldest) = min_max_func(&people, |a, b| a.age - b.age);
    println!("min_max_func age:  {} .. {}", youngest.name, oldest.name);

    if let Err(err) = chunk(&numbers, 0) {
        println!("chunk by 0:        error: {err}");
    }

    Ok(())
}
