//! Static rows served when a franchise CSV cannot be loaded.

use crate::catalog::FallbackRow;

const fn row(
    name: &'static str,
    release_date: &'static str,
    critic_rating: &'static str,
    audience_rating: &'static str,
    my_rating: &'static str,
) -> FallbackRow {
    FallbackRow {
        name,
        release_date,
        critic_rating,
        audience_rating,
        my_rating,
        trailer: "",
    }
}

pub static CHIPMUNKS: &[FallbackRow] = &[
    row("Alvin and the Chipmunks", "12/14/2007", "27%", "3/5", "3.5/5"),
    row("Alvin and the Chipmunks: The Squeakquel", "12/23/2009", "21%", "3/5", "3/5"),
    row("Alvin and the Chipmunks: Chipwrecked", "12/16/2011", "12%", "3/5", "3/5"),
    row("Alvin and the Chipmunks: The Road Chip", "12/18/2015", "15%", "3/5", "2.5/5"),
];

pub static DESPICABLE_ME: &[FallbackRow] = &[
    row("Despicable Me", "7/9/2010", "81%", "4/5", "4.5/5"),
    row("Despicable Me 2", "7/3/2013", "75%", "4/5", "4/5"),
    row("Minions", "7/10/2015", "55%", "3.5/5", "3.5/5"),
    row("Despicable Me 3", "6/30/2017", "58%", "3.5/5", "3/5"),
    row("Minions: The Rise of Gru", "7/1/2022", "70%", "4.5/5", "4/5"),
    row("Despicable Me 4", "7/3/2024", "56%", "4/5", "3.5/5"),
];

pub static GODZILLA: &[FallbackRow] = &[
    row("Godzilla (1954)", "11/3/1954", "93%", "4.5/5", "5/5"),
    row("Godzilla (2014)", "5/16/2014", "76%", "3.5/5", "3.5/5"),
    row("Godzilla: King of the Monsters", "5/31/2019", "42%", "4/5", "3.5/5"),
    row("Godzilla vs. Kong", "3/31/2021", "76%", "4.5/5", "4/5"),
    row("Godzilla Minus One", "12/1/2023", "98%", "5/5", "5/5"),
    row("Godzilla x Kong: The New Empire", "3/29/2024", "54%", "4.5/5", "3.5/5"),
];

pub static KARATE_KID: &[FallbackRow] = &[
    row("The Karate Kid (1984)", "6/22/1984", "90%", "4.5/5", "5/5"),
    row("The Karate Kid Part II", "6/20/1986", "46%", "3.5/5", "3.5/5"),
    row("The Karate Kid Part III", "6/30/1989", "15%", "3/5", "2.5/5"),
    row("The Next Karate Kid", "9/9/1994", "8%", "2.5/5", "2/5"),
    row("The Karate Kid (2010)", "6/11/2010", "66%", "3.5/5", "4/5"),
    row("Karate Kid: Legends", "5/30/2025", "56%", "4/5", "3.5/5"),
];

pub static PIXAR: &[FallbackRow] = &[
    row("Toy Story", "11/22/1995", "100%", "4.5/5", "5/5"),
    row("A Bug's Life", "11/25/1998", "92%", "3.5/5", "3.5/5"),
    row("Toy Story 2", "11/24/1999", "100%", "4/5", "4.5/5"),
    row("Monsters, Inc.", "11/2/2001", "96%", "4.5/5", "5/5"),
    row("Finding Nemo", "5/30/2003", "99%", "4.5/5", "5/5"),
    row("The Incredibles", "11/5/2004", "97%", "4.5/5", "5/5"),
    row("Cars", "6/9/2006", "75%", "4/5", "3.5/5"),
    row("Ratatouille", "6/29/2007", "96%", "4/5", "4.5/5"),
    row("WALL-E", "6/27/2008", "95%", "4.5/5", "5/5"),
    row("Up", "5/29/2009", "98%", "4.5/5", "4.5/5"),
    row("Toy Story 3", "6/18/2010", "98%", "4.5/5", "5/5"),
];

pub static ROCKY: &[FallbackRow] = &[
    row("Rocky", "12/3/1976", "93%", "4.5/5", "5/5"),
    row("Rocky II", "6/15/1979", "74%", "4/5", "4/5"),
    row("Rocky III", "5/28/1982", "67%", "4/5", "4/5"),
    row("Rocky IV", "11/27/1985", "38%", "4/5", "4.5/5"),
    row("Rocky V", "11/16/1990", "32%", "2.5/5", "2/5"),
    row("Rocky Balboa", "12/20/2006", "77%", "4/5", "4/5"),
    row("Creed", "11/25/2015", "95%", "4.5/5", "4.5/5"),
];

pub static STAR_WARS: &[FallbackRow] = &[
    row("Star Wars: A New Hope", "5/25/1977", "93%", "4.5/5", "5/5"),
    row("Star Wars: The Empire Strikes Back", "5/21/1980", "95%", "5/5", "5/5"),
    row("Star Wars: Return of the Jedi", "5/25/1983", "83%", "4.5/5", "4.5/5"),
];

pub static TRANSFORMERS: &[FallbackRow] = &[
    row("Transformers", "7/3/2007", "57%", "4/5", "4/5"),
    row("Transformers: Revenge of the Fallen", "6/24/2009", "19%", "3/5", "2.5/5"),
    row("Transformers: Dark of the Moon", "6/29/2011", "35%", "3/5", "3/5"),
    row("Bumblebee", "12/21/2018", "91%", "4/5", "4/5"),
    row("Transformers: Rise of the Beasts", "6/9/2023", "52%", "4.5/5", "3.5/5"),
    row("Transformers One", "9/20/2024", "89%", "5/5", "4.5/5"),
];
