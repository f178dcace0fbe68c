use super::PromptTable;

pub(super) static TABLE: PromptTable = PromptTable {
    association_both_descriptions: "\
Dime si encuentras una relación directa o indirecta entre '{term}', cuya descripción es '{term_description}', y '{associative_term}', cuya descripción es '{associative_term_description}'.
",
    association_term_description: "\
Dime si encuentras una relación directa o indirecta entre '{term}', cuya descripción es '{term_description}', y '{associative_term}'.
",
    association_associative_description: "\
Dime si encuentras una relación directa o indirecta entre '{term}' y '{associative_term}', cuya descripción es '{associative_term_description}'.
",
    association_without_descriptions: "\
Dime si encuentras una relación directa o indirecta entre '{term}' y '{associative_term}'.
",
    association_instructions: "
Con tal de que exista algún motivo para asociarlos, sea cual sea, ya cuenta como que hay una relación entre ambos.

La respuesta tiene que estar en formato JSON, siguiendo este ejemplo:
{\"term\": \"{term}\", \"associative_term\": \"{associative_term}\", \"relationship\": true/false, \"reason\": \"motivo por el cuál hay o no relación entre {term} y {associative_term}\"}
",

    generation_without_relationship: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con los términos '{term}' y '{associative_term}'.
Los textos deben incentivar al lector a comprar '{term}' debido a que es tendencia '{associative_term}'.

Finalmente, dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_related_without_descriptions: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con los términos '{term}' y '{associative_term}'.
Los textos deben incentivar al lector a comprar '{term}' debido a que es tendencia '{associative_term}'.
Considera el siguiente motivo de asociación entre ambos términos: '{association_reason}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es '{company}', en ellos.

Finalmente, dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_related_term_description: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con los términos '{term}', cuya descripción es '{term_description}', y '{associative_term}'.
Los textos deben incentivar al lector a comprar '{term}' debido a que es tendencia '{associative_term}'.
Considera el siguiente motivo de asociación entre ambos términos: '{association_reason}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es '{company}', en ellos.

Finalmente, dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_related_associative_description: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con los términos '{term}' y '{associative_term}', cuya descripción es '{associative_term_description}'.
Los textos deben incentivar al lector a comprar '{term}' debido a que es tendencia '{associative_term}'.
Considera el siguiente motivo de asociación entre ambos términos: '{association_reason}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es '{company}', en ellos.

Finalmente, dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_related_both_descriptions: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con los términos '{term}', cuya descripción es '{term_description}', y '{associative_term}', cuya descripción es '{associative_term_description}'.
Los textos deben incentivar al lector a comprar '{term}' debido a que es tendencia '{associative_term}'.
Considera el siguiente motivo de asociación entre ambos términos: '{association_reason}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es '{company}', en ellos.

Finalmente, dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_single_with_description: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con el término '{term}', cuya descripción es '{term_description}'.
Es de un minorista llamado {company} en {location} y debe invitar al cliente a comprar '{term}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es {company}, en ellos.

Dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",
    generation_single_without_description: "\
Genera {n} textos de menos de {length} caracteres para un anuncio de Google Ads.
Este anuncio tiene que estar relacionado con el término '{term}'.
Es de un minorista llamado {company} en {location} y debe invitar al cliente a comprar '{term}'.
Si los textos a generar son largos, intenta incluir el nombre del minorista, que es {company}, en ellos.

Dame el resultado en el siguiente formato:
[\"escribe aqui el texto 1\", \"escribe aqui el texto 2\", ..., \"escribe aqui el texto {n}\"]
La respuesta debes darmela exactamente en el formato que te he pasado, sin agregar saltos de linea ni espacios innecesarios. Solo debe ser una lista de textos separados por comas, todo entre corchetes y nada mas.
",

    paths_with_description: "\
Te daré un término y su descripción, y debes generar una ruta de url dividida en {n} partes para ese término.
La ruta debe referirse al término '{term}' y a su descripción '{term_description}'.
Cada parte de la ruta debe ser muy corta, una sola palabra que resuma la idea principal de '{term}'.

Por ejemplo, si el término es 'celulares' y su descripción es 'Samsung Galaxy S23, Samsung Galaxy S23 Ultra',
la parte 1 puede ser 'celulares' y la parte 2 puede ser 'galaxy-s23': www.ecommerce.com/celulares/galaxy-s23
IMPORTANTE: No debe contener mayúsculas ni espacios; si hay varias palabras deben ir en minúsculas y separadas por un guion.

Dame el resultado en el siguiente formato:
[\"parte 1 de la ruta\", \"parte 2 de la ruta\", ..., \"parte {n} de la ruta\"]
La respuesta debes darmela exactamente en ese formato, sin saltos de linea ni espacios innecesarios.
",
    paths_without_description: "\
Te daré un término y debes generar una ruta de url dividida en {n} partes para ese término.
La ruta debe referirse al término '{term}'.
Cada parte de la ruta debe ser muy corta, una sola palabra que resuma la idea principal de '{term}'.

Por ejemplo, si el término es 'celulares', la parte 1 puede ser 'celulares' y la parte 2 puede ser 'smartphones':
www.ecommerce.com/celulares/smartphones
IMPORTANTE: No debe contener mayúsculas ni espacios; si hay varias palabras deben ir en minúsculas y separadas por un guion.

Dame el resultado en el siguiente formato:
[\"parte 1 de la ruta\", \"parte 2 de la ruta\", ..., \"parte {n} de la ruta\"]
La respuesta debes darmela exactamente en ese formato, sin saltos de linea ni espacios innecesarios.
",

    size_enforcement: "\
Te daré un texto de anuncio de Google Ads que es demasiado largo.
Hazlo más corto, no debe tener más de {max_length} caracteres.
El texto es: \"{copy}\"

Proporciona la respuesta en este formato:
texto_acortado
Solamente escribe como respuesta el texto acortado, sin comillas, saltos de linea ni nada adicional.
",
    path_size_enforcement: "\
Te daré una lista de partes de ruta para anuncios de Google Ads que pueden ser demasiado largas.
La lista puede tener una sola parte o estar vacía, y ambos casos son válidos.
Acorta cada parte que tenga más de {max_length} caracteres y deja igual las que no lo necesiten.
El texto es: {copy}
Dame el resultado en el mismo formato que el texto:
[\"parte 1 de la ruta\", \"parte 2 de la ruta\"]
IMPORTANTE: No debe contener mayúsculas ni espacios; si hay varias palabras deben ir en minúsculas y separadas por un guion.
",
    feature_extraction: "\
Dada la siguiente descripción de producto:
\"{description}\"
Dame una lista breve de las características principales.
Dame el resultado en el siguiente formato:
\"Característica 1\", \"Característica 2\", ..., \"Característica N\"
",
    keywords: "\
Dado el término '{term}', dame una lista de hasta 10 palabras clave para Google Ads relacionadas con ese término.
Dame el resultado en el siguiente formato:
[\"Palabra clave 1\", \"Palabra clave 2\", ..., \"Palabra clave N\"]
La respuesta debes darmela exactamente en ese formato, sin saltos de linea ni espacios innecesarios.
",
};
